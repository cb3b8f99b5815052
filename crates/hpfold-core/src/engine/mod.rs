//! # Engine Module
//!
//! The population-level machinery that drives a genetic search over folds.
//!
//! - **Configuration** ([`config`]) - Population size, rates, selection pressure, and stopping criteria
//! - **State Tracking** ([`state`]) - Best-so-far solutions and per-generation statistics
//! - **Selection** ([`selection`]) - Tournament and elitist selection over scored populations
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod progress;
pub(crate) mod selection;
pub mod state;
