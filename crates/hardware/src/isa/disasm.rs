//! Instruction disassembler.
//!
//! Converts a 32-bit instruction word into a human-readable mnemonic string
//! for debug tracing and test diagnostics.
//!
//! Rendering conventions:
//!
//! - Registers print as `r0`-`r31`, immediates as `$<signed value>`.
//! - Loads and stores use the `mn rX, $imm(rY)` form.
//! - `lui` / `auipc` report the 20-bit upper field rather than the shifted
//!   immediate.
//! - Three compressed encodings (C.ADDI4SPN, C.ADDIW, C.SLLI) print as their
//!   expanded 32-bit equivalents followed by `  \t(compressed)`; execution of
//!   compressed instructions is not supported.
//! - Any unrecognized encoding renders as the literal `illegal instruction`.

use crate::common::error::SimError;
use crate::isa::decode::{Decoded, decode};
use crate::isa::{funct3, funct7, opcodes};

/// Disassembles a 32-bit instruction word.
///
/// Never fails: unrecognized encodings render as `illegal instruction`.
pub fn disassemble(inst: u32) -> String {
    format_instruction(inst).unwrap_or_else(|_| "illegal instruction".to_string())
}

/// Renders the instruction, or reports why it cannot be rendered.
fn format_instruction(inst: u32) -> Result<String, SimError> {
    // The two low bits of every 32-bit encoding are 0b11; anything else is
    // a 16-bit compressed encoding.
    if inst & 0x3 != 0x3 {
        return format_compressed(inst as u16);
    }

    let d = decode(inst);
    match d.opcode {
        opcodes::OP_REG => format_op_reg(&d, false),
        opcodes::OP_REG_32 => format_op_reg(&d, true),
        opcodes::OP_IMM => format_op_imm(&d, false),
        opcodes::OP_IMM_32 => format_op_imm(&d, true),

        opcodes::OP_LOAD => {
            let mn = match d.funct3 {
                funct3::LB => "lb",
                funct3::LH => "lh",
                funct3::LW => "lw",
                funct3::LD => "ld",
                funct3::LBU => "lbu",
                funct3::LHU => "lhu",
                funct3::LWU => "lwu",
                _ => return Err(SimError::IllegalInstruction(inst)),
            };
            Ok(format!("{mn} {}, {}({})", reg(d.rd), imm(d.imm_i()), reg(d.rs1)))
        }

        opcodes::OP_STORE => {
            let mn = match d.funct3 {
                funct3::SB => "sb",
                funct3::SH => "sh",
                funct3::SW => "sw",
                funct3::SD => "sd",
                _ => return Err(SimError::IllegalInstruction(inst)),
            };
            Ok(format!("{mn} {}, {}({})", reg(d.rs2), imm(d.imm_s()), reg(d.rs1)))
        }

        opcodes::OP_BRANCH => {
            let mn = match d.funct3 {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => return Err(SimError::IllegalInstruction(inst)),
            };
            Ok(format!("{mn} {}, {}, {}", reg(d.rs1), reg(d.rs2), imm(d.imm_b())))
        }

        opcodes::OP_JALR => Ok(format!(
            "jalr {}, {}({})",
            reg(d.rd),
            imm(d.imm_i()),
            reg(d.rs1)
        )),
        opcodes::OP_JAL => Ok(format!("jal {}, {}", reg(d.rd), imm(d.imm_j()))),

        // The upper-immediate instructions report the raw 20-bit field.
        opcodes::OP_LUI => Ok(format!("lui {}, {}", reg(d.rd), imm(d.imm_u() >> 12))),
        opcodes::OP_AUIPC => Ok(format!("auipc {}, {}", reg(d.rd), imm(d.imm_u() >> 12))),

        _ => Err(SimError::IllegalInstruction(inst)),
    }
}

/// Renders a register-register instruction, validating funct3/funct7.
fn format_op_reg(d: &Decoded, word_variant: bool) -> Result<String, SimError> {
    let mn = match (d.funct3, d.funct7, word_variant) {
        (funct3::ADD_SUB, funct7::DEFAULT, false) => "add",
        (funct3::ADD_SUB, funct7::SUB, false) => "sub",
        (funct3::SLL, funct7::DEFAULT, false) => "sll",
        (funct3::SLT, funct7::DEFAULT, false) => "slt",
        (funct3::SLTU, funct7::DEFAULT, false) => "sltu",
        (funct3::XOR, funct7::DEFAULT, false) => "xor",
        (funct3::SRL_SRA, funct7::DEFAULT, false) => "srl",
        (funct3::SRL_SRA, funct7::SRA, false) => "sra",
        (funct3::OR, funct7::DEFAULT, false) => "or",
        (funct3::AND, funct7::DEFAULT, false) => "and",

        (funct3::ADD_SUB, funct7::DEFAULT, true) => "addw",
        (funct3::ADD_SUB, funct7::SUB, true) => "subw",
        (funct3::SLL, funct7::DEFAULT, true) => "sllw",
        (funct3::SRL_SRA, funct7::DEFAULT, true) => "srlw",
        (funct3::SRL_SRA, funct7::SRA, true) => "sraw",

        _ => return Err(SimError::IllegalInstruction(d.raw)),
    };
    Ok(format!("{mn} {}, {}, {}", reg(d.rd), reg(d.rs1), reg(d.rs2)))
}

/// Renders an immediate-arithmetic instruction, validating shift encodings.
fn format_op_imm(d: &Decoded, word_variant: bool) -> Result<String, SimError> {
    // Shift amounts live in the low bits of the immediate; the rest of the
    // immediate field must match one of the two shift function codes.
    let shamt_mask: i64 = if word_variant { 0x1F } else { 0x3F };

    let (mn, value) = match (d.funct3, word_variant) {
        (funct3::ADD_SUB, false) => ("addi", d.imm_i()),
        (funct3::SLT, false) => ("slti", d.imm_i()),
        (funct3::SLTU, false) => ("sltiu", d.imm_i()),
        (funct3::XOR, false) => ("xori", d.imm_i()),
        (funct3::OR, false) => ("ori", d.imm_i()),
        (funct3::AND, false) => ("andi", d.imm_i()),
        (funct3::ADD_SUB, true) => ("addiw", d.imm_i()),

        (funct3::SLL, word) => match d.funct7 {
            funct7::DEFAULT => (if word { "slliw" } else { "slli" }, d.imm_i() & shamt_mask),
            _ => return Err(SimError::IllegalInstruction(d.raw)),
        },
        (funct3::SRL_SRA, word) => match d.funct7 {
            funct7::DEFAULT => (if word { "srliw" } else { "srli" }, d.imm_i() & shamt_mask),
            funct7::SRA => (if word { "sraiw" } else { "srai" }, d.imm_i() & shamt_mask),
            _ => return Err(SimError::IllegalInstruction(d.raw)),
        },

        _ => return Err(SimError::IllegalInstruction(d.raw)),
    };
    Ok(format!("{mn} {}, {}, {}", reg(d.rd), reg(d.rs1), imm(value)))
}

/// Renders the three recognized compressed encodings as their 32-bit
/// expansions, tagged with a `(compressed)` suffix.
fn format_compressed(inst: u16) -> Result<String, SimError> {
    let quadrant = inst & 0x3;
    let f3 = (inst >> 13) & 0x7;

    let text = match (quadrant, f3) {
        // C.ADDI4SPN: addi rd', r2, nzuimm
        (0x0, 0x0) => {
            let rd = ((inst >> 2) & 0x7) as usize + 8;
            let uimm = (((inst >> 11) & 0x3) as u32) << 4
                | (((inst >> 7) & 0xF) as u32) << 6
                | (((inst >> 6) & 0x1) as u32) << 2
                | (((inst >> 5) & 0x1) as u32) << 3;
            format!("addi {}, {}, {}", reg(rd), reg(2), imm(uimm as i64))
        }

        // C.ADDIW: addiw rd, rd, imm
        (0x1, 0x1) => {
            let rd = ((inst >> 7) & 0x1F) as usize;
            let uimm = (((inst >> 12) & 0x1) as u32) << 5 | ((inst >> 2) & 0x1F) as u32;
            let value = ((uimm as i64) ^ 0x20).wrapping_sub(0x20);
            format!("addiw {}, {}, {}", reg(rd), reg(rd), imm(value))
        }

        // C.SLLI: slli rd, rd, shamt
        (0x2, 0x0) => {
            let rd = ((inst >> 7) & 0x1F) as usize;
            let shamt = (((inst >> 12) & 0x1) as u32) << 5 | ((inst >> 2) & 0x1F) as u32;
            format!("slli {}, {}, {}", reg(rd), reg(rd), imm(shamt as i64))
        }

        _ => return Err(SimError::IllegalInstruction(inst as u32)),
    };

    Ok(format!("{text}  \t(compressed)"))
}

fn reg(idx: usize) -> String {
    format!("r{idx}")
}

fn imm(value: i64) -> String {
    format!("${value}")
}
