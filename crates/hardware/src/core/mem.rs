//! Instruction and data memory ports.
//!
//! This module implements the sized, enable-gated ports through which the
//! fetch and memory stages reach the memory bus. It provides:
//! 1. **Instruction port:** Half-word or word reads for instruction fetch.
//! 2. **Data port:** Byte to double-word reads and writes, gated by read
//!    and write enables, with optional sign-extension of loaded values.
//! 3. **Pulse discipline:** Reads are combinational; writes are staged and
//!    only commit when the port is pulsed at the end of the cycle.

use crate::common::error::SimError;
use crate::soc::bus::MemoryBus;

/// Instruction memory port. Valid access sizes are 2 and 4 bytes.
#[derive(Debug, Default)]
pub struct InstructionMemory {
    addr: u64,
    size: u8,
}

impl InstructionMemory {
    /// Creates an instruction port with no address or size configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fetch address.
    pub fn set_address(&mut self, addr: u64) {
        self.addr = addr;
    }

    /// Sets the fetch size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalAccess`] for sizes other than 2 or 4.
    pub fn set_size(&mut self, size: u8) -> Result<(), SimError> {
        if size != 2 && size != 4 {
            return Err(SimError::IllegalAccess(size));
        }
        self.size = size;
        Ok(())
    }

    /// Reads the half-word or word at the configured address.
    pub fn value(&self, bus: &mut dyn MemoryBus) -> Result<u64, SimError> {
        match self.size {
            2 => Ok(bus.read_half_word(self.addr)? as u64),
            4 => Ok(bus.read_word(self.addr)? as u64),
            other => Err(SimError::IllegalAccess(other)),
        }
    }
}

/// Data memory port. Valid access sizes are 1, 2, 4, and 8 bytes.
#[derive(Debug, Default)]
pub struct DataMemory {
    addr: u64,
    size: u8,
    data_in: u64,
    read_enable: bool,
    write_enable: bool,
}

impl DataMemory {
    /// Creates a data port with both enables cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access address.
    pub fn set_address(&mut self, addr: u64) {
        self.addr = addr;
    }

    /// Sets the access size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IllegalAccess`] for sizes outside {1, 2, 4, 8}.
    pub fn set_size(&mut self, size: u8) -> Result<(), SimError> {
        if size != 1 && size != 2 && size != 4 && size != 8 {
            return Err(SimError::IllegalAccess(size));
        }
        self.size = size;
        Ok(())
    }

    /// Stages the value to store on the next pulse.
    pub fn set_data_in(&mut self, value: u64) {
        self.data_in = value;
    }

    /// Enables or disables the read path.
    pub fn set_read_enable(&mut self, enable: bool) {
        self.read_enable = enable;
    }

    /// Enables or disables the pending write.
    pub fn set_write_enable(&mut self, enable: bool) {
        self.write_enable = enable;
    }

    /// Clears both enables so no stray access occurs on idle cycles.
    pub fn clear_enables(&mut self) {
        self.read_enable = false;
        self.write_enable = false;
    }

    /// Reads the configured location, zero- or sign-extended to 64 bits.
    ///
    /// Returns 0 when the read path is disabled.
    pub fn data_out(&self, bus: &mut dyn MemoryBus, sign_extend: bool) -> Result<u64, SimError> {
        if !self.read_enable {
            return Ok(0);
        }

        Ok(match self.size {
            1 => {
                let byte = bus.read_byte(self.addr)?;
                if sign_extend {
                    byte as i8 as i64 as u64
                } else {
                    byte as u64
                }
            }
            2 => {
                let half = bus.read_half_word(self.addr)?;
                if sign_extend {
                    half as i16 as i64 as u64
                } else {
                    half as u64
                }
            }
            4 => {
                let word = bus.read_word(self.addr)?;
                if sign_extend {
                    word as i32 as i64 as u64
                } else {
                    word as u64
                }
            }
            8 => bus.read_double_word(self.addr)?,
            other => return Err(SimError::IllegalAccess(other)),
        })
    }

    /// Commits the pending write, if enabled.
    pub fn clock_pulse(&mut self, bus: &mut dyn MemoryBus) -> Result<(), SimError> {
        if !self.write_enable {
            return Ok(());
        }

        match self.size {
            1 => bus.write_byte(self.addr, self.data_in as u8),
            2 => bus.write_half_word(self.addr, self.data_in as u16),
            4 => bus.write_word(self.addr, self.data_in as u32),
            8 => bus.write_double_word(self.addr, self.data_in),
            other => Err(SimError::IllegalAccess(other)),
        }
    }
}
