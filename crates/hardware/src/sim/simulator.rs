//! Top-level simulator.
//!
//! Owns the architectural state (register file, PC, memory bus), the four
//! pipeline registers, the five stages, and the run statistics, and steps
//! them through the simulated clock.
//!
//! One call to [`Simulator::tick`] is one simulated cycle. In pipelined
//! mode the cycle has two phases: every stage's `propagate` runs first, in
//! fetch-to-writeback order, each reading only pipeline registers as
//! written at the end of the previous cycle; then every stage's
//! `clock_pulse` commits its outgoing register and owned state. Because
//! each stage buffers its outputs internally between the phases, the pulse
//! order carries no information.
//!
//! Two couplings cross the phase boundary and are made explicit here:
//!
//! - The register-file write for the instruction in M/WB lands during the
//!   pulse phase, after decode has read its operands; decode therefore
//!   forwards straight from the *current* M/WB register.
//! - Execute forwards from the producer two instructions ahead via
//!   `prev_m_wb`, an immutable snapshot of M/WB taken at the end of the
//!   previous cycle, immediately after the memory stage overwrote the
//!   live register.
//!
//! In non-pipelined mode each stage's propagate and pulse run back to
//! back, so one instruction traverses all five stages within a single
//! cycle and no hazard machinery is involved.

use crate::common::error::SimError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::CycleControl;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages::{
    DecodeStage, ExecuteStage, FetchStage, MemoryStage, WriteBackStage,
};
use crate::soc::bus::MemoryBus;
use crate::stats::SimStats;

/// Result of one simulated cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cycle completed; the program has not finished.
    Continue,
    /// The test end marker was fetched at the given address and the
    /// pipeline has drained. The driver reports statistics and exits.
    EndOfTest(u64),
}

/// Cycle-stepped RV64I simulator.
pub struct Simulator<B: MemoryBus> {
    /// Memory image, owned by the bus.
    pub bus: B,
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Architectural program counter.
    pub pc: u64,
    /// Run statistics.
    pub stats: SimStats,

    if_id: IfId,
    id_ex: IdEx,
    ex_m: ExMem,
    m_wb: MemWb,
    /// M/WB as latched at the end of the previous cycle.
    prev_m_wb: MemWb,

    fetch: FetchStage,
    decode: DecodeStage,
    execute: ExecuteStage,
    memory: MemoryStage,
    writeback: WriteBackStage,

    ctrl: CycleControl,
    pipelining: bool,
    debug: bool,
}

impl<B: MemoryBus> Simulator<B> {
    /// Creates a simulator over the given bus, with PC and registers zeroed.
    pub fn new(bus: B, config: &Config) -> Self {
        Self {
            bus,
            regs: RegisterFile::new(),
            pc: 0,
            stats: SimStats::default(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_m: ExMem::default(),
            m_wb: MemWb::default(),
            prev_m_wb: MemWb::default(),
            fetch: FetchStage::new(),
            decode: DecodeStage::new(),
            execute: ExecuteStage::new(),
            memory: MemoryStage::new(),
            writeback: WriteBackStage::new(),
            ctrl: CycleControl::default(),
            pipelining: config.pipelining,
            debug: config.debug,
        }
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// # Errors
    ///
    /// Any error from a stage aborts the cycle and is surfaced unchanged;
    /// the cycle counter is not incremented for an aborted cycle.
    pub fn tick(&mut self) -> Result<CycleOutcome, SimError> {
        if self.pipelining {
            self.tick_pipelined()
        } else {
            self.tick_simple()
        }
    }

    /// One cycle of the five-stage pipeline: propagate all stages in
    /// fetch-to-writeback order, then pulse them all.
    fn tick_pipelined(&mut self) -> Result<CycleOutcome, SimError> {
        self.ctrl.clear();

        self.fetch.propagate(self.pc, &mut self.bus, true)?;
        self.decode.propagate(
            &self.if_id,
            &self.id_ex,
            &self.m_wb,
            &mut self.regs,
            &mut self.ctrl,
            self.debug,
            true,
        );
        self.execute
            .propagate(&self.id_ex, &self.ex_m, &self.prev_m_wb, &mut self.ctrl, true);
        self.memory.propagate(&self.ex_m, &mut self.bus)?;
        self.writeback
            .propagate(&self.m_wb, &mut self.regs, &mut self.stats);

        let drained = self
            .fetch
            .clock_pulse(&mut self.pc, &mut self.if_id, &self.ctrl, true);
        self.decode
            .clock_pulse(&mut self.id_ex, &self.ctrl, &mut self.stats, true)?;
        self.execute.clock_pulse(&mut self.ex_m, &mut self.pc);
        self.memory.clock_pulse(&mut self.m_wb, &mut self.bus)?;
        self.writeback.clock_pulse(&mut self.regs);

        // Publish this cycle's M/WB for next cycle's M-to-EX forwarding.
        self.prev_m_wb = self.m_wb;

        self.stats.cycles += 1;

        match drained {
            Some(addr) => Ok(CycleOutcome::EndOfTest(addr)),
            None => Ok(CycleOutcome::Continue),
        }
    }

    /// One cycle of the non-pipelined reference mode: each stage's
    /// propagate and pulse run back to back, so the fetched instruction
    /// retires within the same cycle.
    fn tick_simple(&mut self) -> Result<CycleOutcome, SimError> {
        self.ctrl.clear();

        if let Some(addr) = self.fetch.propagate(self.pc, &mut self.bus, false)? {
            // The marker terminates on the spot; the PC does not advance
            // and the marker cycle is not counted.
            return Ok(CycleOutcome::EndOfTest(addr));
        }
        self.fetch
            .clock_pulse(&mut self.pc, &mut self.if_id, &self.ctrl, false);

        self.decode.propagate(
            &self.if_id,
            &self.id_ex,
            &self.m_wb,
            &mut self.regs,
            &mut self.ctrl,
            self.debug,
            false,
        );
        self.decode
            .clock_pulse(&mut self.id_ex, &self.ctrl, &mut self.stats, false)?;

        self.execute
            .propagate(&self.id_ex, &self.ex_m, &self.prev_m_wb, &mut self.ctrl, false);
        self.execute.clock_pulse(&mut self.ex_m, &mut self.pc);

        self.memory.propagate(&self.ex_m, &mut self.bus)?;
        self.memory.clock_pulse(&mut self.m_wb, &mut self.bus)?;

        self.writeback
            .propagate(&self.m_wb, &mut self.regs, &mut self.stats);
        self.writeback.clock_pulse(&mut self.regs);

        self.stats.cycles += 1;
        Ok(CycleOutcome::Continue)
    }
}
