//! Error definitions for the simulator core.
//!
//! This module defines the error taxonomy raised from the stages to the
//! driver. It provides:
//! 1. **Error Representation:** One variant per failure class, each carrying
//!    the offending word, size, or address.
//! 2. **Propagation Policy:** Stages never recover from these internally;
//!    every error travels up through the per-cycle step to the driver.
//! 3. **Reporting:** `Display` and `std::error::Error` integration for
//!    driver-level diagnostics.
//!
//! Normal end-of-test is *not* an error; the per-cycle step reports it as
//! `CycleOutcome::EndOfTest` so the driver can distinguish a clean shutdown
//! from a failure.

use std::fmt;

/// Errors raised by the simulator core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Illegal instruction.
    ///
    /// Raised when an instruction word carries an opcode outside the
    /// recognized RV64I set. The associated value is the instruction word.
    IllegalInstruction(u32),

    /// Illegal memory-port access.
    ///
    /// Raised when a memory port is configured with a size outside its
    /// permitted set (2/4 for instruction fetch, 1/2/4/8 for data).
    /// The associated value is the rejected size.
    IllegalAccess(u8),

    /// Bus fault.
    ///
    /// Raised when an access falls outside every mapped memory region.
    /// The associated value is the faulting address.
    BusFault(u64),

    /// Instruction fetch failure.
    ///
    /// Raised when the fetch stage cannot read an instruction word.
    /// The associated value is the program counter of the failed fetch.
    InstructionFetchFailure(u64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IllegalInstruction(word) => {
                write!(f, "illegal instruction {:#010x}", word)
            }
            SimError::IllegalAccess(size) => {
                write!(f, "invalid memory access size {}", size)
            }
            SimError::BusFault(addr) => write!(f, "bus fault at address {:#x}", addr),
            SimError::InstructionFetchFailure(addr) => {
                write!(f, "instruction fetch failed at address {:#x}", addr)
            }
        }
    }
}

impl std::error::Error for SimError {}
