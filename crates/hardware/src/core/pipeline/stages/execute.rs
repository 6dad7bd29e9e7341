//! Execute (EX) stage.
//!
//! Runs the ALU over the selected operands, resolves branches and jumps,
//! and owns the architectural PC on control-flow cycles. In pipelined mode
//! this stage closes the two execute-side forwarding paths before operand
//! selection:
//!
//! - **EX-to-EX.** A non-load producer one instruction ahead sits in EX/M;
//!   its ALU result substitutes for a matching source.
//! - **M-to-EX.** A producer two ahead was latched into M/WB at the end of
//!   the previous cycle; the simulator publishes that register as an
//!   immutable snapshot and its writeback value substitutes for any source
//!   the EX-to-EX path did not already cover.
//!
//! A taken branch or a jump redirects the PC at the pulse and flushes the
//! two wrongly fetched successors (the slots in IF/ID and ID/EX).

use crate::core::alu::Alu;
use crate::core::pipeline::CycleControl;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::isa::{funct3, opcodes};

/// Execute stage.
#[derive(Debug, Default)]
pub struct ExecuteStage {
    /// Results bundle, latched into EX/M on the pulse.
    out: ExMem,
    /// The PC must be redirected at the pulse.
    pc_write: bool,
    /// Redirect target.
    next_pc: u64,
}

impl ExecuteStage {
    /// Creates an execute stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the ALU result and resolves control flow for ID/EX.
    pub fn propagate(
        &mut self,
        id_ex: &IdEx,
        ex_m: &ExMem,
        prev_m_wb: &MemWb,
        ctrl: &mut CycleControl,
        pipelining: bool,
    ) {
        self.pc_write = false;

        if id_ex.bubble {
            self.out = ExMem::default();
            return;
        }

        let mut rs1_value = id_ex.read_data1;
        let mut rs2_value = id_ex.read_data2;

        if pipelining {
            let mut rs1_forwarded = false;
            let mut rs2_forwarded = false;

            // EX-to-EX: the producer in EX/M, unless its result is still
            // in flight from memory (loads stall their consumers instead).
            if ex_m.ctrl.reg_write && !ex_m.ctrl.mem_to_reg && ex_m.rd != 0 {
                if ex_m.rd == id_ex.rs1 {
                    rs1_value = ex_m.alu;
                    rs1_forwarded = true;
                }
                if ex_m.rd == id_ex.rs2 {
                    rs2_value = ex_m.alu;
                    rs2_forwarded = true;
                }
            }

            // M-to-EX: the producer latched into M/WB last cycle. The
            // EX-to-EX match wins because its producer is younger.
            if prev_m_wb.ctrl.reg_write && prev_m_wb.rd != 0 {
                let value = hazards::writeback_value(prev_m_wb);
                if !rs1_forwarded && prev_m_wb.rd == id_ex.rs1 {
                    rs1_value = value;
                }
                if !rs2_forwarded && prev_m_wb.rd == id_ex.rs2 {
                    rs2_value = value;
                }
            }
        }

        let op_a = match id_ex.opcode {
            opcodes::OP_AUIPC => id_ex.pc,
            opcodes::OP_LUI => 0,
            _ => rs1_value,
        };
        let op_b = if id_ex.ctrl.alu_src {
            id_ex.imm as u64
        } else {
            rs2_value
        };

        let mut alu_result = Alu::execute(id_ex.ctrl.alu_op, op_a, op_b);

        // AUIPC is PC + imm by construction of the operands; restate it
        // explicitly so the result does not depend on operand selection.
        if id_ex.opcode == opcodes::OP_AUIPC {
            alu_result = id_ex.pc.wrapping_add(id_ex.imm as u64);
        }

        if id_ex.ctrl.branch {
            let taken = match id_ex.funct3 {
                funct3::BEQ => rs1_value == rs2_value,
                funct3::BNE => rs1_value != rs2_value,
                funct3::BLT => (rs1_value as i64) < (rs2_value as i64),
                funct3::BGE => (rs1_value as i64) >= (rs2_value as i64),
                funct3::BLTU => rs1_value < rs2_value,
                funct3::BGEU => rs1_value >= rs2_value,
                _ => false,
            };
            if taken {
                self.next_pc = id_ex.pc.wrapping_add(id_ex.imm as u64);
                self.pc_write = true;
            }
        }

        if id_ex.ctrl.jump {
            // The link value is the return address, not the ALU output.
            alu_result = id_ex.pc.wrapping_add(4);
            self.next_pc = match id_ex.opcode {
                opcodes::OP_JALR => rs1_value.wrapping_add(id_ex.imm as u64) & !1,
                _ => id_ex.pc.wrapping_add(id_ex.imm as u64),
            };
            self.pc_write = true;
        }

        // Kill the two wrongly fetched successors behind a redirect.
        if self.pc_write && pipelining {
            ctrl.flush_fetch = true;
            ctrl.flush_decode = true;
        }

        self.out = ExMem {
            pc: id_ex.pc,
            alu: alu_result,
            write_data: rs2_value,
            rd: id_ex.rd,
            ctrl: id_ex.ctrl,
            bubble: false,
        };
    }

    /// Latches EX/M and redirects the PC on taken branches and jumps.
    pub fn clock_pulse(&mut self, ex_m: &mut ExMem, pc: &mut u64) {
        *ex_m = self.out;
        if self.pc_write {
            *pc = self.next_pc;
        }
    }
}
