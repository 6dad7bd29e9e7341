//! Control-signal generation tests.
//!
//! Spot checks of the opcode/funct3/funct7 table and the default-bundle
//! behavior for unrecognized combinations.

use crate::common::encode::*;
use rv64emu_core::core::control::{AluOp, ControlSignals};
use rv64emu_core::isa::decode::decode;

fn signals(inst: u32) -> ControlSignals {
    ControlSignals::from_instruction(&decode(inst))
}

#[test]
fn register_arithmetic() {
    let c = signals(add(1, 2, 3));
    assert!(c.reg_write);
    assert!(!c.alu_src);
    assert_eq!(c.alu_op, AluOp::Add);
    assert!(!c.mem_read && !c.mem_write && !c.branch && !c.jump);

    assert_eq!(signals(sub(1, 2, 3)).alu_op, AluOp::Sub);
    assert_eq!(signals(sll(1, 2, 3)).alu_op, AluOp::Sll);
    assert_eq!(signals(sltu(1, 2, 3)).alu_op, AluOp::Sltu);
    assert_eq!(signals(sra(1, 2, 3)).alu_op, AluOp::Sra);
}

#[test]
fn word_variants_select_w_operations() {
    assert_eq!(signals(addw(1, 2, 3)).alu_op, AluOp::Addw);
    assert_eq!(signals(subw(1, 2, 3)).alu_op, AluOp::Subw);
    assert_eq!(signals(addiw(1, 2, 3)).alu_op, AluOp::Addw);
}

#[test]
fn immediate_arithmetic_uses_the_immediate_operand() {
    let c = signals(addi(1, 2, 5));
    assert!(c.reg_write);
    assert!(c.alu_src);
    assert_eq!(c.alu_op, AluOp::Add);
}

#[test]
fn immediate_shifts_decode_funct7_from_the_immediate() {
    assert_eq!(signals(slli(1, 2, 13)).alu_op, AluOp::Sll);
    assert_eq!(signals(srli(1, 2, 13)).alu_op, AluOp::Srl);
    assert_eq!(signals(srai(1, 2, 13)).alu_op, AluOp::Sra);
}

#[test]
fn loads_set_size_and_extension() {
    let c = signals(lw(1, 2, 0));
    assert!(c.reg_write && c.alu_src && c.mem_read && c.mem_to_reg);
    assert_eq!(c.alu_op, AluOp::Add);
    assert_eq!(c.mem_size, 4);
    assert!(c.mem_sign_extend);

    let c = signals(lbu(1, 2, 0));
    assert_eq!(c.mem_size, 1);
    assert!(!c.mem_sign_extend);

    let c = signals(ld(1, 2, 0));
    assert_eq!(c.mem_size, 8);
}

#[test]
fn stores_write_memory_not_registers() {
    let c = signals(sw(1, 2, 0));
    assert!(!c.reg_write);
    assert!(c.alu_src && c.mem_write);
    assert_eq!(c.alu_op, AluOp::Add);
    assert_eq!(c.mem_size, 4);

    assert_eq!(signals(sd(1, 2, 0)).mem_size, 8);
}

#[test]
fn branches_compare_registers() {
    let c = signals(beq(1, 2, 8));
    assert!(c.branch);
    assert!(!c.alu_src && !c.reg_write && !c.jump);
    assert_eq!(c.alu_op, AluOp::Sub);
}

#[test]
fn jumps_link_and_redirect() {
    for inst in [jal(1, 8), jalr(1, 2, 0)] {
        let c = signals(inst);
        assert!(c.jump && c.reg_write && c.alu_src);
        assert_eq!(c.alu_op, AluOp::Add);
    }
}

#[test]
fn upper_immediates_add() {
    for inst in [lui(1, 0x12345), auipc(1, 0x12345)] {
        let c = signals(inst);
        assert!(c.reg_write && c.alu_src);
        assert_eq!(c.alu_op, AluOp::Add);
    }
}

#[test]
fn unrecognized_encodings_yield_a_bubble() {
    // OP with funct7 = 0x01 (the multiply extension) is not recognized.
    let c = signals(r_type(0b0110011, 1, 0, 2, 3, 0x01));
    assert!(!c.reg_write && !c.mem_read && !c.mem_write && !c.branch && !c.jump);
    assert_eq!(c.alu_op, AluOp::Nop);

    // Unknown opcodes produce the same harmless default.
    let c = signals(0x0000_0073);
    assert!(!c.reg_write);
    assert_eq!(c.alu_op, AluOp::Nop);
}
