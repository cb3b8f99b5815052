//! # Core Module
//!
//! Fundamental building blocks of the HP lattice model.
//!
//! - **Models** ([`models`]) - Turns, lattice points, residue sequences, and the `Fold` genome
//! - **Lattice Walk** ([`lattice`]) - Reconstruction of absolute coordinates from relative turns
//! - **Scoring** ([`scoring`]) - Overlap and hydrophobic-contact counting, fitness derivation
//!
//! A `Fold` owns its turn sequence and a cached [`scoring::Evaluation`]. Every operation that
//! changes the turns moves the fold back to `Evaluation::Unevaluated`, so a stale score can
//! never be read as a valid one.

pub mod lattice;
pub mod models;
pub mod scoring;
