//! Writeback (WB) stage.
//!
//! Configures the register-file write port from M/WB during propagate and
//! pulses the file at the end of the cycle. Retired instructions are
//! counted here; bubbles are not retired.

use crate::common::reg::RegisterFile;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::MemWb;
use crate::stats::SimStats;

/// Writeback stage.
#[derive(Debug, Default)]
pub struct WriteBackStage;

impl WriteBackStage {
    /// Creates a writeback stage.
    pub fn new() -> Self {
        Self
    }

    /// Sets up the register-file write port for the instruction in M/WB.
    pub fn propagate(&mut self, m_wb: &MemWb, regs: &mut RegisterFile, stats: &mut SimStats) {
        if !m_wb.bubble {
            stats.instr_completed += 1;
        }

        regs.set_rd(m_wb.rd);
        regs.set_write_enable(m_wb.ctrl.reg_write);
        regs.set_write_data(hazards::writeback_value(m_wb));
    }

    /// Pulses the register file, committing the pending write.
    pub fn clock_pulse(&mut self, regs: &mut RegisterFile) {
        regs.clock_pulse();
    }
}
