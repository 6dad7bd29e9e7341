//! Pipeline registers.
//!
//! Each register carries the values a later stage needs from an earlier
//! one. Registers may be read during propagate and are only written during
//! the clock pulse; a stage that needs a value across the phase boundary
//! buffers it internally rather than re-reading its incoming register.
//!
//! Every register carries a `bubble` marker. A bubble has all control bits
//! false and produces no architectural effect; bubbles are excluded from
//! the issued/retired counters and from the debug trace. The default value
//! of every register is a bubble, which also covers the uninitialized
//! first-cycle slots of a pipelined run.

use crate::common::constants::INST_NOP;
use crate::core::control::ControlSignals;

/// IF/ID register: fetch to decode.
#[derive(Clone, Copy, Debug)]
pub struct IfId {
    /// Program counter of the fetched instruction.
    pub pc: u64,
    /// Fetched 32-bit instruction word.
    pub inst: u32,
    /// Slot carries no instruction.
    pub bubble: bool,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: INST_NOP,
            bubble: true,
        }
    }
}

/// ID/EX register: decode to execute.
#[derive(Clone, Copy, Debug)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Value read for rs1 (after WB-to-ID forwarding).
    pub read_data1: u64,
    /// Value read for rs2 (after WB-to-ID forwarding).
    pub read_data2: u64,
    /// Sign-extended immediate.
    pub imm: i64,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Major opcode (operand selection and jump targets depend on it).
    pub opcode: u32,
    /// funct3 field (branch condition selection).
    pub funct3: u32,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
    /// Slot carries no instruction.
    pub bubble: bool,
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            pc: 0,
            read_data1: 0,
            read_data2: 0,
            imm: 0,
            rd: 0,
            rs1: 0,
            rs2: 0,
            opcode: 0,
            funct3: 0,
            ctrl: ControlSignals::default(),
            bubble: true,
        }
    }
}

/// EX/M register: execute to memory.
#[derive(Clone, Copy, Debug)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u64,
    /// ALU result (the access address for loads and stores).
    pub alu: u64,
    /// Store datum (forwarded rs2 value).
    pub write_data: u64,
    /// Destination register index.
    pub rd: usize,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
    /// Slot carries no instruction.
    pub bubble: bool,
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            pc: 0,
            alu: 0,
            write_data: 0,
            rd: 0,
            ctrl: ControlSignals::default(),
            bubble: true,
        }
    }
}

/// M/WB register: memory to writeback.
#[derive(Clone, Copy, Debug)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u64,
    /// ALU result.
    pub alu: u64,
    /// Loaded value, extended to 64 bits (zero for non-loads).
    pub mem_data: u64,
    /// Destination register index.
    pub rd: usize,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Slot carries no instruction.
    pub bubble: bool,
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            pc: 0,
            alu: 0,
            mem_data: 0,
            rd: 0,
            ctrl: ControlSignals::default(),
            bubble: true,
        }
    }
}
