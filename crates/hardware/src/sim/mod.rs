//! Simulation driver.
//!
//! The [`simulator::Simulator`] owns the architectural state and steps the
//! five stages through the two-phase cycle; [`loader`] places program
//! images into memory.

/// Program image loading.
pub mod loader;

/// Top-level simulator and per-cycle step.
pub mod simulator;

pub use simulator::{CycleOutcome, Simulator};
