//! Five-stage pipeline.
//!
//! This module holds the pipeline registers, the hazard and forwarding
//! logic, the per-cycle control flags, and the stage implementations.
//!
//! A simulated cycle has two phases. In the propagate phase every stage
//! reads its incoming pipeline register (as written at the end of the
//! previous cycle) and computes its outputs combinationally; in the pulse
//! phase every stage commits its outgoing pipeline register and any owned
//! architectural state. Stages buffer everything they need between the two
//! phases internally, so the pulse order does not matter.

/// Hazard detection and forwarding-value selection.
pub mod hazards;

/// Pipeline registers between the stages.
pub mod latches;

/// The five stage implementations.
pub mod stages;

/// Per-cycle pipeline control flags.
///
/// Cleared at the start of every cycle; raised during the propagate phase
/// (by the decode stage for load-use stalls, by the execute stage for
/// control-flow flushes) and consumed during the pulse phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleControl {
    /// Hold PC and IF/ID unchanged this cycle.
    pub stall_fetch: bool,
    /// Replace the decoded bundle with a bubble (load-use stall).
    pub insert_decode_bubble: bool,
    /// Replace IF/ID with a bubble (wrong-path fetch).
    pub flush_fetch: bool,
    /// Replace ID/EX with a bubble (wrong-path decode).
    pub flush_decode: bool,
}

impl CycleControl {
    /// Resets all flags for a new cycle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
