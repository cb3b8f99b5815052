//! # hpfold Core Library
//!
//! Conformation scoring and genetic operators for the two-dimensional
//! hydrophobic-polar (HP) lattice protein model.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Value types (`Direction`, `LatticePoint`, `HpSequence`),
//!   the `Fold` genome with its cached evaluation, lattice walk reconstruction, and the
//!   quadratic contact/overlap scan.
//!
//! - **[`engine`]: The Evolution Machinery.** Configuration, error types, progress
//!   reporting, and the population-level operators (selection, generation statistics).
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures, such as running a
//!   generational genetic search for the best fold of a residue sequence.

pub mod core;
pub mod engine;
pub mod workflows;
