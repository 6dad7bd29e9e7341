//! ALU operation tests.
//!
//! Covers the arithmetic table, shift-amount masking, signed variants,
//! and the 32-bit boundary behaviors.

use rv64emu_core::core::alu::Alu;
use rv64emu_core::core::control::AluOp;

#[test]
fn nop_returns_zero() {
    assert_eq!(Alu::execute(AluOp::Nop, 0xDEAD, 0xBEEF), 0);
}

#[test]
fn add_wraps() {
    assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    assert_eq!(Alu::execute(AluOp::Add, u64::MAX, 1), 0);
}

#[test]
fn sub_wraps() {
    assert_eq!(Alu::execute(AluOp::Sub, 12, 7), 5);
    assert_eq!(Alu::execute(AluOp::Sub, 0, 1), u64::MAX);
}

#[test]
fn add_then_sub_restores_operand() {
    let a = 0x0123_4567_89AB_CDEF;
    let b = 0xFEDC_BA98_7654_3210;
    assert_eq!(Alu::execute(AluOp::Sub, Alu::execute(AluOp::Add, a, b), b), a);
}

#[test]
fn sll_by_63() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 63), 1 << 63);
}

#[test]
fn shift_amount_is_masked_to_six_bits() {
    // A shift by 64 masks to 0 and is the identity.
    assert_eq!(Alu::execute(AluOp::Sll, 0x1234, 64), 0x1234);
    assert_eq!(Alu::execute(AluOp::Srl, 0x1234, 64), 0x1234);
    assert_eq!(Alu::execute(AluOp::Sra, 0x1234, 64), 0x1234);
}

#[test]
fn srl_is_logical() {
    assert_eq!(Alu::execute(AluOp::Srl, u64::MAX, 60), 0xF);
}

#[test]
fn sra_preserves_sign_in_every_bit() {
    let negative = -16i64 as u64;
    assert_eq!(Alu::execute(AluOp::Sra, negative, 2), -4i64 as u64);
    assert_eq!(Alu::execute(AluOp::Sra, negative, 63), u64::MAX);
}

#[test]
fn slt_is_signed() {
    assert_eq!(Alu::execute(AluOp::Slt, -1i64 as u64, 1), 1);
    assert_eq!(Alu::execute(AluOp::Slt, 1, -1i64 as u64), 0);
    assert_eq!(Alu::execute(AluOp::Slt, 3, 3), 0);
}

#[test]
fn sltu_is_unsigned() {
    assert_eq!(Alu::execute(AluOp::Sltu, -1i64 as u64, 1), 0);
    assert_eq!(Alu::execute(AluOp::Sltu, 1, -1i64 as u64), 1);
}

#[test]
fn bitwise_ops() {
    assert_eq!(Alu::execute(AluOp::Xor, 0b1100, 0b1010), 0b0110);
    assert_eq!(Alu::execute(AluOp::Or, 0b1100, 0b1010), 0b1110);
    assert_eq!(Alu::execute(AluOp::And, 0b1100, 0b1010), 0b1000);
}

#[test]
fn addw_overflow_wraps_and_sign_extends() {
    // INT32_MAX + 1 produces INT32_MIN sign-extended into 64 bits.
    assert_eq!(
        Alu::execute(AluOp::Addw, i32::MAX as u64, 1),
        0xFFFF_FFFF_8000_0000
    );
}

#[test]
fn addw_ignores_upper_operand_bits() {
    assert_eq!(Alu::execute(AluOp::Addw, 0xFFFF_FFFF_0000_0001, 2), 3);
}

#[test]
fn subw_sign_extends() {
    assert_eq!(Alu::execute(AluOp::Subw, 0, 1), u64::MAX);
    assert_eq!(
        Alu::execute(AluOp::Subw, i32::MIN as u32 as u64, 1),
        0x7FFF_FFFF
    );
}

#[test]
fn word_shifts_mask_to_five_bits_and_sign_extend() {
    // A shift by 32 masks to 0.
    assert_eq!(Alu::execute(AluOp::Sllw, 0x8000_0000, 32), 0xFFFF_FFFF_8000_0000);
    assert_eq!(Alu::execute(AluOp::Sllw, 1, 31), 0xFFFF_FFFF_8000_0000);
    // SRLW shifts in zeroes but sign-extends the 32-bit result.
    assert_eq!(Alu::execute(AluOp::Srlw, 0x8000_0000, 1), 0x4000_0000);
    assert_eq!(Alu::execute(AluOp::Srlw, 0x8000_0000, 0), 0xFFFF_FFFF_8000_0000);
    // SRAW replicates bit 31.
    assert_eq!(Alu::execute(AluOp::Sraw, 0x8000_0000, 4), 0xFFFF_FFFF_F800_0000);
}
