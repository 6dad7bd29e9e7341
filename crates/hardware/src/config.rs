//! Simulator configuration.
//!
//! This module defines the configuration structure used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants for memory layout and execution mode.
//! 2. **Deserialization:** The structure derives `serde::Deserialize`, so a
//!    driver can take configuration from JSON as well as from CLI flags.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Base address of the memory image. Programs are linked at zero.
    pub const MEMORY_BASE: u64 = 0;

    /// Size of the memory image in bytes (128 KiB).
    pub const MEMORY_SIZE: usize = 128 * 1024;
}

/// Run configuration.
///
/// All fields have defaults, so a partial JSON document (or none at all)
/// is accepted.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Execute with the five-stage pipeline; the default is the simpler
    /// non-pipelined reference mode.
    pub pipelining: bool,
    /// Dump each decoded instruction to stderr.
    pub debug: bool,
    /// Base address of the memory image.
    pub memory_base: u64,
    /// Size of the memory image in bytes.
    pub memory_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipelining: false,
            debug: false,
            memory_base: defaults::MEMORY_BASE,
            memory_size: defaults::MEMORY_SIZE,
        }
    }
}
