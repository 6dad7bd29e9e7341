//! Instruction Fetch (IF) stage.
//!
//! Reads a 32-bit instruction word from memory at the current PC and hands
//! it to decode through the IF/ID register. The fetch stage also owns
//! end-of-run detection: when the fetched word is the test end marker, a
//! pipelined run keeps feeding bubbles for five more cycles so the
//! in-flight instructions can drain, while a non-pipelined run terminates
//! on the spot.
//!
//! A fetched marker is only provisional until the pulse: an execute-stage
//! redirect in the same cycle (or during the drain) proves the marker was
//! on the wrong path, and fetching resumes at the redirect target instead.

use crate::common::constants::{INST_NOP, TEST_END_MARKER};
use crate::common::error::SimError;
use crate::core::mem::InstructionMemory;
use crate::core::pipeline::CycleControl;
use crate::core::pipeline::latches::IfId;
use crate::soc::bus::MemoryBus;

/// Number of clock pulses from fetching the end marker to shutdown,
/// enough for every in-flight instruction to retire.
const DRAIN_PULSES: u8 = 5;

/// Instruction fetch stage.
#[derive(Debug, Default)]
pub struct FetchStage {
    imem: InstructionMemory,
    /// Word fetched during propagate, latched into IF/ID on the pulse.
    fetched: u32,
    /// The end marker was fetched this cycle; armed at the pulse unless a
    /// redirect or stall intervenes.
    marker_pending: bool,
    /// The end marker is committed; only bubbles leave this stage now.
    end_marker_seen: bool,
    /// Address the end marker was fetched from.
    marker_pc: u64,
    /// Remaining pulses before shutdown once the marker is committed.
    drain: u8,
}

impl FetchStage {
    /// Creates a fetch stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// Returns `Some(pc)` when the end marker is fetched in non-pipelined
    /// mode, which terminates the run immediately. In pipelined mode the
    /// marker is held as pending and a NOP takes its slot.
    ///
    /// # Errors
    ///
    /// Any bus error is reported as
    /// [`SimError::InstructionFetchFailure`] at the current PC.
    pub fn propagate(
        &mut self,
        pc: u64,
        bus: &mut dyn MemoryBus,
        pipelining: bool,
    ) -> Result<Option<u64>, SimError> {
        self.marker_pending = false;

        if self.end_marker_seen {
            self.fetched = INST_NOP;
            return Ok(None);
        }

        self.imem.set_address(pc);
        self.imem.set_size(4)?;

        let word = self
            .imem
            .value(bus)
            .map_err(|_| SimError::InstructionFetchFailure(pc))? as u32;

        if word == TEST_END_MARKER {
            if !pipelining {
                return Ok(Some(pc));
            }
            self.marker_pending = true;
            self.marker_pc = pc;
            self.fetched = INST_NOP;
            return Ok(None);
        }

        self.fetched = word;
        Ok(None)
    }

    /// Latches IF/ID and advances the PC.
    ///
    /// In pipelined mode a flush writes a bubble (the PC advance is left
    /// to the execute stage, which owns it on control-flow cycles) and a
    /// stall leaves both the PC and IF/ID untouched. Returns `Some(addr)`
    /// once the drain countdown expires.
    pub fn clock_pulse(
        &mut self,
        pc: &mut u64,
        if_id: &mut IfId,
        ctrl: &CycleControl,
        pipelining: bool,
    ) -> Option<u64> {
        if !pipelining {
            *if_id = IfId {
                pc: *pc,
                inst: self.fetched,
                bubble: false,
            };
            *pc = pc.wrapping_add(4);
            return None;
        }

        // An execute-stage redirect proves everything fetched since the
        // branch was on the wrong path, including a pending marker or a
        // committed drain. Fetching resumes at the redirect target.
        if ctrl.flush_decode {
            self.marker_pending = false;
            self.end_marker_seen = false;
            self.drain = 0;
        }

        if self.end_marker_seen || self.marker_pending {
            if ctrl.stall_fetch && !self.end_marker_seen {
                // Held back by a stall; the marker is refetched next cycle.
                return None;
            }
            if self.marker_pending {
                self.marker_pending = false;
                self.end_marker_seen = true;
                self.drain = DRAIN_PULSES;
            }
            *if_id = IfId::default();
            self.drain = self.drain.saturating_sub(1);
            if self.drain == 0 {
                return Some(self.marker_pc);
            }
            return None;
        }

        if ctrl.flush_fetch {
            *if_id = IfId::default();
        } else if ctrl.stall_fetch {
            // Hold PC and IF/ID; the same word is refetched next cycle.
        } else {
            *if_id = IfId {
                pc: *pc,
                inst: self.fetched,
                bubble: false,
            };
            *pc = pc.wrapping_add(4);
        }

        None
    }
}
