//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** The canonical NOP encoding and the test end marker.
//! 2. **Error Handling:** The `SimError` taxonomy raised to the driver.
//! 3. **Register File:** The 32-entry general-purpose register file with
//!    port-latched writes.

/// Shared instruction-word constants.
pub mod constants;

/// Error types surfaced to the driver.
pub mod error;

/// General-purpose register file.
pub mod reg;

pub use constants::{INST_NOP, TEST_END_MARKER};
pub use error::SimError;
pub use reg::RegisterFile;
