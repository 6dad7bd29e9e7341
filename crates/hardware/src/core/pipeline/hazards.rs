//! Data hazard detection and forwarding.
//!
//! This module implements the logic that preserves sequential program
//! semantics across overlapping instructions. It provides:
//! 1. **Load-use detection:** A load result is only available after the
//!    memory stage, so a consumer immediately behind it must stall for one
//!    cycle while a bubble fills the execute slot.
//! 2. **Forwarding-value selection:** The value an in-flight producer will
//!    write back, used by both the WB-to-ID and M-to-EX bypass paths.

use crate::core::pipeline::latches::{IdEx, MemWb};
use crate::isa::decode::Decoded;
use crate::isa::opcodes;

/// Returns whether the opcode reads rs2 as a register operand.
///
/// Loads, immediate arithmetic, JALR, LUI, AUIPC, and JAL either have no
/// rs2 field or replace it with immediate bits.
pub fn uses_rs2(opcode: u32) -> bool {
    matches!(
        opcode,
        opcodes::OP_REG | opcodes::OP_REG_32 | opcodes::OP_STORE | opcodes::OP_BRANCH
    )
}

/// Checks whether the newly decoded instruction must stall behind a load.
///
/// True when the instruction currently in ID/EX is a load whose destination
/// register is consumed by `next` in rs1, or in rs2 for the opcodes that
/// read it. Loads into `x0` never stall anything.
pub fn need_stall_load_use(id_ex: &IdEx, next: &Decoded) -> bool {
    if !id_ex.ctrl.mem_read || id_ex.rd == 0 {
        return false;
    }

    id_ex.rd == next.rs1 || (uses_rs2(next.opcode) && id_ex.rd == next.rs2)
}

/// Returns the value an instruction at the writeback boundary will commit:
/// the loaded datum for loads, the ALU result otherwise.
///
/// Jumps need no special case here because the execute stage already
/// replaced their ALU result with the return address.
pub fn writeback_value(m_wb: &MemWb) -> u64 {
    if m_wb.ctrl.mem_to_reg {
        m_wb.mem_data
    } else {
        m_wb.alu
    }
}
