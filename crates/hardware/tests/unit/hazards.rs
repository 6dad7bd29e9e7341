//! Load-use hazard detection tests.
//!
//! Verifies that a stall is required exactly when the instruction in ID/EX
//! is a load whose destination the newly decoded instruction consumes.

use crate::common::encode::*;
use rv64emu_core::core::control::ControlSignals;
use rv64emu_core::core::pipeline::hazards::{need_stall_load_use, uses_rs2};
use rv64emu_core::core::pipeline::latches::IdEx;
use rv64emu_core::isa::decode::decode;
use rv64emu_core::isa::opcodes;

/// An ID/EX slot holding a load into `rd`.
fn load_in_flight(rd: usize) -> IdEx {
    IdEx {
        rd,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            mem_to_reg: true,
            ..Default::default()
        },
        bubble: false,
        ..Default::default()
    }
}

/// An ID/EX slot holding an ALU write to `rd` (not a load).
fn alu_in_flight(rd: usize) -> IdEx {
    IdEx {
        rd,
        ctrl: ControlSignals {
            reg_write: true,
            ..Default::default()
        },
        bubble: false,
        ..Default::default()
    }
}

#[test]
fn stalls_when_load_rd_matches_rs1() {
    assert!(need_stall_load_use(
        &load_in_flight(5),
        &decode(add(3, 5, 1))
    ));
    assert!(need_stall_load_use(&load_in_flight(5), &decode(ld(2, 5, 0))));
}

#[test]
fn stalls_when_load_rd_matches_rs2_of_an_rs2_consumer() {
    assert!(need_stall_load_use(
        &load_in_flight(7),
        &decode(add(3, 1, 7))
    ));
    assert!(need_stall_load_use(
        &load_in_flight(7),
        &decode(sd(7, 1, 0))
    ));
    assert!(need_stall_load_use(
        &load_in_flight(7),
        &decode(beq(1, 7, 8))
    ));
}

#[test]
fn rs2_field_bits_do_not_stall_non_rs2_consumers() {
    // The shift amount of slli occupies the rs2 bit positions, but an
    // I-type instruction does not read rs2.
    assert!(!need_stall_load_use(
        &load_in_flight(9),
        &decode(slli(3, 1, 9))
    ));
    assert!(!need_stall_load_use(
        &load_in_flight(9),
        &decode(addi(3, 1, 9))
    ));
}

#[test]
fn no_stall_without_a_load() {
    assert!(!need_stall_load_use(
        &alu_in_flight(5),
        &decode(add(3, 5, 1))
    ));
}

#[test]
fn no_stall_without_a_dependency() {
    assert!(!need_stall_load_use(
        &load_in_flight(5),
        &decode(add(3, 6, 7))
    ));
}

#[test]
fn load_to_x0_never_stalls() {
    assert!(!need_stall_load_use(
        &load_in_flight(0),
        &decode(add(3, 0, 0))
    ));
}

#[test]
fn bubble_never_stalls() {
    assert!(!need_stall_load_use(
        &IdEx::default(),
        &decode(add(3, 1, 2))
    ));
}

#[test]
fn rs2_consumer_opcode_set() {
    assert!(uses_rs2(opcodes::OP_REG));
    assert!(uses_rs2(opcodes::OP_REG_32));
    assert!(uses_rs2(opcodes::OP_STORE));
    assert!(uses_rs2(opcodes::OP_BRANCH));

    assert!(!uses_rs2(opcodes::OP_IMM));
    assert!(!uses_rs2(opcodes::OP_IMM_32));
    assert!(!uses_rs2(opcodes::OP_LOAD));
    assert!(!uses_rs2(opcodes::OP_JAL));
    assert!(!uses_rs2(opcodes::OP_JALR));
    assert!(!uses_rs2(opcodes::OP_LUI));
    assert!(!uses_rs2(opcodes::OP_AUIPC));
}
