//! RV64I function codes (funct3).
//!
//! The `funct3` field (bits 14-12) selects the concrete operation within a
//! major opcode. The same numeric value means different things under
//! different opcodes, so the constants are grouped by the opcode that
//! interprets them.

// Under OP_LOAD: access width and extension of the loaded value.

/// lb: one byte, sign-extended.
pub const LB: u32 = 0b000;
/// lh: half-word, sign-extended.
pub const LH: u32 = 0b001;
/// lw: word, sign-extended.
pub const LW: u32 = 0b010;
/// ld: double-word.
pub const LD: u32 = 0b011;
/// lbu: one byte, zero-extended.
pub const LBU: u32 = 0b100;
/// lhu: half-word, zero-extended.
pub const LHU: u32 = 0b101;
/// lwu: word, zero-extended.
pub const LWU: u32 = 0b110;

// Under OP_STORE: access width.

/// sb: one byte.
pub const SB: u32 = 0b000;
/// sh: half-word.
pub const SH: u32 = 0b001;
/// sw: word.
pub const SW: u32 = 0b010;
/// sd: double-word.
pub const SD: u32 = 0b011;

// Under OP_BRANCH: comparison condition.

/// beq: taken when equal.
pub const BEQ: u32 = 0b000;
/// bne: taken when not equal.
pub const BNE: u32 = 0b001;
/// blt: taken when less than, signed.
pub const BLT: u32 = 0b100;
/// bge: taken when greater or equal, signed.
pub const BGE: u32 = 0b101;
/// bltu: taken when less than, unsigned.
pub const BLTU: u32 = 0b110;
/// bgeu: taken when greater or equal, unsigned.
pub const BGEU: u32 = 0b111;

// Under OP_REG / OP_IMM and their 32-bit forms: ALU operation. Two values
// are shared by a pair of operations that funct7 tells apart.

/// add or sub (funct7 selects).
pub const ADD_SUB: u32 = 0b000;
/// Shift left logical.
pub const SLL: u32 = 0b001;
/// Set less than, signed.
pub const SLT: u32 = 0b010;
/// Set less than, unsigned.
pub const SLTU: u32 = 0b011;
/// Exclusive or.
pub const XOR: u32 = 0b100;
/// Shift right, logical or arithmetic (funct7 selects).
pub const SRL_SRA: u32 = 0b101;
/// Inclusive or.
pub const OR: u32 = 0b110;
/// And.
pub const AND: u32 = 0b111;
