//! RV64I function codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects between the standard and alternate
//! encodings of operations sharing an opcode and funct3 (ADD vs SUB,
//! SRL vs SRA). For shift-by-immediate instructions the same two values
//! appear in the upper bits of the I-type immediate.

/// Standard encoding (ADD, SLL, SRL, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding for subtraction (SUB, SUBW).
pub const SUB: u32 = 0b0100000;

/// Alternate encoding for arithmetic right shift (SRA, SRAW, SRAI, SRAIW).
pub const SRA: u32 = 0b0100000;
