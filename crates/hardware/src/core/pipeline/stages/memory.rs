//! Memory access (M) stage.
//!
//! Drives the data port for loads and stores. The ALU result from EX/M is
//! the byte address; loads read combinationally during propagate (extended
//! per the control bits) and stores commit when the port is pulsed. On
//! cycles without a memory operation both enables are cleared so no stray
//! access reaches the bus.

use crate::common::error::SimError;
use crate::core::mem::DataMemory;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::soc::bus::MemoryBus;

/// Memory access stage.
#[derive(Debug, Default)]
pub struct MemoryStage {
    dmem: DataMemory,
    /// Results bundle, latched into M/WB on the pulse.
    out: MemWb,
}

impl MemoryStage {
    /// Creates a memory stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the data port from EX/M and performs any read.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalAccess`] for an invalid access size and
    /// [`SimError::BusFault`] for an unmapped load address.
    pub fn propagate(&mut self, ex_m: &ExMem, bus: &mut dyn MemoryBus) -> Result<(), SimError> {
        let mut mem_data = 0;

        if ex_m.ctrl.mem_read || ex_m.ctrl.mem_write {
            self.dmem.set_address(ex_m.alu);
            self.dmem.set_size(ex_m.ctrl.mem_size)?;
            self.dmem.set_data_in(ex_m.write_data);
            self.dmem.set_read_enable(ex_m.ctrl.mem_read);
            self.dmem.set_write_enable(ex_m.ctrl.mem_write);

            if ex_m.ctrl.mem_read {
                mem_data = self.dmem.data_out(bus, ex_m.ctrl.mem_sign_extend)?;
            }
        } else {
            self.dmem.clear_enables();
        }

        self.out = MemWb {
            pc: ex_m.pc,
            alu: ex_m.alu,
            mem_data,
            rd: ex_m.rd,
            ctrl: ex_m.ctrl,
            bubble: ex_m.bubble,
        };

        Ok(())
    }

    /// Pulses the data port (committing a pending store) and latches M/WB.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BusFault`] for an unmapped store address.
    pub fn clock_pulse(&mut self, m_wb: &mut MemWb, bus: &mut dyn MemoryBus) -> Result<(), SimError> {
        self.dmem.clock_pulse(bus)?;
        *m_wb = self.out;
        Ok(())
    }
}
