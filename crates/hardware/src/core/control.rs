//! Datapath control signals.
//!
//! This module maps a decoded instruction to the control bits that steer the
//! later pipeline stages: the ALU operation, operand selection, memory
//! access size and sign-extension, branch/jump classification, and register
//! writeback.
//!
//! An unrecognized funct3/funct7 combination within a recognized opcode
//! yields the all-false default bundle, which flows through the pipeline as
//! a harmless no-op.

use crate::isa::decode::Decoded;
use crate::isa::{funct3, funct7, opcodes};

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// No operation; the ALU outputs 0.
    #[default]
    Nop,
    /// 64-bit wrapping addition.
    Add,
    /// 64-bit wrapping subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// 32-bit addition, sign-extended.
    Addw,
    /// 32-bit subtraction, sign-extended.
    Subw,
    /// 32-bit shift left logical, sign-extended.
    Sllw,
    /// 32-bit shift right logical, sign-extended.
    Srlw,
    /// 32-bit shift right arithmetic, sign-extended.
    Sraw,
}

/// Control signals steering the execute, memory, and writeback stages.
///
/// The default value (all false, `AluOp::Nop`, size 0) is a bubble: it has
/// no architectural effect when it reaches writeback.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Write the result to the register file.
    pub reg_write: bool,
    /// ALU operand B source: `false` = rs2 value, `true` = immediate.
    pub alu_src: bool,
    /// Memory read enable (loads).
    pub mem_read: bool,
    /// Memory write enable (stores).
    pub mem_write: bool,
    /// Writeback source: `false` = ALU result, `true` = memory data.
    pub mem_to_reg: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (JAL/JALR).
    pub jump: bool,
    /// ALU operation.
    pub alu_op: AluOp,
    /// Memory access size in bytes (1, 2, 4, or 8; 0 when unused).
    pub mem_size: u8,
    /// Sign-extend the loaded value to 64 bits.
    pub mem_sign_extend: bool,
}

impl ControlSignals {
    /// Derives the control bundle from a decoded instruction.
    pub fn from_instruction(d: &Decoded) -> Self {
        let mut c = ControlSignals::default();

        match d.opcode {
            opcodes::OP_REG => {
                c.reg_write = true;
                c.alu_op = match (d.funct3, d.funct7) {
                    (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
                    (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
                    (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                    (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
                    (funct3::SLTU, funct7::DEFAULT) => AluOp::Sltu,
                    (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
                    (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                    (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                    (funct3::OR, funct7::DEFAULT) => AluOp::Or,
                    (funct3::AND, funct7::DEFAULT) => AluOp::And,
                    _ => return ControlSignals::default(),
                };
            }

            opcodes::OP_IMM => {
                c.reg_write = true;
                c.alu_src = true;
                // For the shift encodings the shift-function distinction
                // lives in the funct7 bits of the immediate field.
                c.alu_op = match d.funct3 {
                    funct3::ADD_SUB => AluOp::Add,
                    funct3::SLT => AluOp::Slt,
                    funct3::SLTU => AluOp::Sltu,
                    funct3::XOR => AluOp::Xor,
                    funct3::OR => AluOp::Or,
                    funct3::AND => AluOp::And,
                    funct3::SLL if d.funct7 == funct7::DEFAULT => AluOp::Sll,
                    funct3::SRL_SRA if d.funct7 == funct7::DEFAULT => AluOp::Srl,
                    funct3::SRL_SRA if d.funct7 == funct7::SRA => AluOp::Sra,
                    _ => return ControlSignals::default(),
                };
            }

            opcodes::OP_REG_32 => {
                c.reg_write = true;
                c.alu_op = match (d.funct3, d.funct7) {
                    (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Addw,
                    (funct3::ADD_SUB, funct7::SUB) => AluOp::Subw,
                    (funct3::SLL, funct7::DEFAULT) => AluOp::Sllw,
                    (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srlw,
                    (funct3::SRL_SRA, funct7::SRA) => AluOp::Sraw,
                    _ => return ControlSignals::default(),
                };
            }

            opcodes::OP_IMM_32 => {
                c.reg_write = true;
                c.alu_src = true;
                c.alu_op = match d.funct3 {
                    funct3::ADD_SUB => AluOp::Addw,
                    funct3::SLL if d.funct7 == funct7::DEFAULT => AluOp::Sllw,
                    funct3::SRL_SRA if d.funct7 == funct7::DEFAULT => AluOp::Srlw,
                    funct3::SRL_SRA if d.funct7 == funct7::SRA => AluOp::Sraw,
                    _ => return ControlSignals::default(),
                };
            }

            opcodes::OP_LOAD => {
                c.reg_write = true;
                c.alu_src = true;
                c.mem_read = true;
                c.mem_to_reg = true;
                c.alu_op = AluOp::Add;
                let (size, sign) = match d.funct3 {
                    funct3::LB => (1, true),
                    funct3::LH => (2, true),
                    funct3::LW => (4, true),
                    funct3::LD => (8, false),
                    funct3::LBU => (1, false),
                    funct3::LHU => (2, false),
                    funct3::LWU => (4, false),
                    _ => return ControlSignals::default(),
                };
                c.mem_size = size;
                c.mem_sign_extend = sign;
            }

            opcodes::OP_STORE => {
                c.alu_src = true;
                c.mem_write = true;
                c.alu_op = AluOp::Add;
                c.mem_size = match d.funct3 {
                    funct3::SB => 1,
                    funct3::SH => 2,
                    funct3::SW => 4,
                    funct3::SD => 8,
                    _ => return ControlSignals::default(),
                };
            }

            opcodes::OP_BRANCH => {
                c.branch = true;
                c.alu_op = AluOp::Sub;
            }

            opcodes::OP_JAL | opcodes::OP_JALR => {
                c.reg_write = true;
                c.jump = true;
                c.alu_src = true;
                c.alu_op = AluOp::Add;
            }

            // LUI computes ADD(0, imm); AUIPC computes ADD(PC, imm).
            // The execute stage substitutes operand A accordingly.
            opcodes::OP_LUI | opcodes::OP_AUIPC => {
                c.reg_write = true;
                c.alu_src = true;
                c.alu_op = AluOp::Add;
            }

            _ => return ControlSignals::default(),
        }

        c
    }
}
