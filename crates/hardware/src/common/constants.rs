//! Shared instruction-word constants.

/// ADDI x0, x0, 0, the canonical NOP; fills flushed pipeline slots.
pub const INST_NOP: u32 = 0x0000_0013;

/// Distinguished instruction word that terminates a simulation run when
/// fetched. All-ones is not a legal RV64I encoding, so it cannot collide
/// with real code.
pub const TEST_END_MARKER: u32 = 0xFFFF_FFFF;
