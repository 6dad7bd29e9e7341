//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`), 64 bits each.
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and silently
//!    drops writes.
//! 3. **Port Discipline:** Reads are combinational through the rs1/rs2
//!    selects; the write port is latched and only commits on `clock_pulse`.

/// General-purpose register file with two read ports and one write port.
///
/// The read ports are combinational: setting a select makes the value
/// available immediately. The write port is staged: `set_rd`,
/// `set_write_data`, and `set_write_enable` configure a pending write that
/// `clock_pulse` commits at the end of the cycle.
pub struct RegisterFile {
    regs: [u64; 32],
    rs1: usize,
    rs2: usize,
    rd: usize,
    write_data: u64,
    write_enable: bool,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers cleared to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; 32],
            rs1: 0,
            rs2: 0,
            rd: 0,
            write_data: 0,
            write_enable: false,
        }
    }

    /// Selects the register driven onto read port 1.
    pub fn set_rs1(&mut self, rs1: usize) {
        self.rs1 = rs1;
    }

    /// Selects the register driven onto read port 2.
    pub fn set_rs2(&mut self, rs2: usize) {
        self.rs2 = rs2;
    }

    /// Returns the value on read port 1. Register `x0` always reads zero.
    pub fn read_data1(&self) -> u64 {
        self.read(self.rs1)
    }

    /// Returns the value on read port 2. Register `x0` always reads zero.
    pub fn read_data2(&self) -> u64 {
        self.read(self.rs2)
    }

    /// Selects the destination register for the pending write.
    pub fn set_rd(&mut self, rd: usize) {
        self.rd = rd;
    }

    /// Stages the value for the pending write.
    pub fn set_write_data(&mut self, value: u64) {
        self.write_data = value;
    }

    /// Enables or disables the pending write.
    pub fn set_write_enable(&mut self, enable: bool) {
        self.write_enable = enable;
    }

    /// Commits the pending write. Writes to `x0` are dropped.
    pub fn clock_pulse(&mut self) {
        if self.write_enable && self.rd != 0 {
            self.regs[self.rd] = self.write_data;
        }
    }

    /// Reads a register directly, bypassing the port selects.
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register directly, bypassing the write port. Used by the
    /// loader and tests; writes to `x0` are dropped.
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stderr, two per line.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            eprintln!(
                "x{:<2} = {:#018x}    x{:<2} = {:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
