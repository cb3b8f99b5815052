//! # Workflows Module
//!
//! High-level procedures built on the `core` and `engine` layers.
//!
//! - **Evolution Workflow** ([`evolve`]) - Generational genetic search for the fittest fold of an
//!   HP sequence, with elitism, tournament selection, single-point crossover, and point mutation.

pub mod evolve;
