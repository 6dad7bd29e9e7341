//! Instruction Decode (ID) stage.
//!
//! Decodes the word in IF/ID, derives the control signals, and reads the
//! source operands from the register file. In pipelined mode this stage
//! also closes the two decode-side hazard paths:
//!
//! - **WB-to-ID forwarding.** The register-file write for the instruction
//!   now in M/WB only lands at the end of this cycle, after our read, so
//!   its value is taken straight from the M/WB register when it matches one
//!   of our sources.
//! - **Load-use stalls.** When the instruction in ID/EX is a load whose
//!   destination we consume, decode raises a fetch stall and inserts a
//!   bubble in its own slot; the held instruction is re-decoded next cycle.
//!
//! An illegal instruction is only raised at the clock pulse, when the
//! bundle would actually issue: a wrong-path word behind a taken branch is
//! flushed in the same cycle and must not take the simulation down.

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::core::control::ControlSignals;
use crate::core::pipeline::CycleControl;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{IdEx, IfId, MemWb};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::stats::SimStats;

/// Instruction decode stage.
#[derive(Debug, Default)]
pub struct DecodeStage {
    /// Fully decoded bundle, latched into ID/EX on the pulse.
    out: IdEx,
    /// Decoding failed; raised at the pulse unless the slot is flushed.
    pending_illegal: Option<SimError>,
}

impl DecodeStage {
    /// Creates a decode stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes IF/ID and prepares the outgoing ID/EX bundle.
    ///
    /// When the debug trace is enabled, every non-bubble instruction is
    /// dumped as `<pc>\t<disassembly>` before decoding proceeds.
    #[allow(clippy::too_many_arguments)]
    pub fn propagate(
        &mut self,
        if_id: &IfId,
        id_ex: &IdEx,
        m_wb: &MemWb,
        regs: &mut RegisterFile,
        ctrl: &mut CycleControl,
        debug: bool,
        pipelining: bool,
    ) {
        self.pending_illegal = None;

        if if_id.bubble {
            self.out = IdEx::default();
            return;
        }

        let d = decode(if_id.inst);

        if debug {
            eprintln!("{:#x}\t{}", if_id.pc, disassemble(if_id.inst));
        }

        let control = ControlSignals::from_instruction(&d);
        let imm = match d.immediate() {
            Ok(imm) => imm,
            Err(e) => {
                self.pending_illegal = Some(e);
                0
            }
        };

        // Register fetch through the combinational read ports.
        regs.set_rs1(d.rs1);
        regs.set_rs2(d.rs2);
        let mut read_data1 = regs.read_data1();
        let mut read_data2 = regs.read_data2();

        if pipelining {
            // WB-to-ID forwarding: the value in M/WB is written back later
            // this cycle, after our register read.
            if m_wb.ctrl.reg_write && m_wb.rd != 0 && !m_wb.bubble {
                let value = hazards::writeback_value(m_wb);
                if m_wb.rd == d.rs1 {
                    read_data1 = value;
                }
                if hazards::uses_rs2(d.opcode) && m_wb.rd == d.rs2 {
                    read_data2 = value;
                }
            }

            if hazards::need_stall_load_use(id_ex, &d) {
                ctrl.stall_fetch = true;
                ctrl.insert_decode_bubble = true;
            }
        }

        self.out = IdEx {
            pc: if_id.pc,
            read_data1,
            read_data2,
            imm,
            rd: d.rd,
            rs1: d.rs1,
            rs2: d.rs2,
            opcode: d.opcode,
            funct3: d.funct3,
            ctrl: control,
            bubble: false,
        };
    }

    /// Latches ID/EX.
    ///
    /// A decode flush or an inserted load-use bubble replaces the bundle
    /// with a bubble; only the bubble case counts as a stall. Issued
    /// instructions are counted here, where the bundle actually enters the
    /// execute slot.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalInstruction`] when an instruction with
    /// an unrecognized opcode reaches the issue point.
    pub fn clock_pulse(
        &mut self,
        id_ex: &mut IdEx,
        ctrl: &CycleControl,
        stats: &mut SimStats,
        pipelining: bool,
    ) -> Result<(), SimError> {
        if pipelining && (ctrl.flush_decode || ctrl.insert_decode_bubble) {
            *id_ex = IdEx::default();
            self.pending_illegal = None;
            if ctrl.insert_decode_bubble {
                stats.stalls += 1;
            }
            return Ok(());
        }

        if let Some(e) = self.pending_illegal.take() {
            return Err(e);
        }

        if !self.out.bubble {
            stats.instr_issued += 1;
        }
        *id_ex = self.out;
        Ok(())
    }
}
