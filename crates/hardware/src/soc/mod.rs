//! Memory system.
//!
//! The simulator core is written against the [`bus::MemoryBus`] trait; the
//! concrete [`bus::MainMemory`] device backs it with a flat little-endian
//! byte array. All accesses are byte-granular, so misaligned reads and
//! writes split naturally and never fault.

/// Memory bus trait and main memory device.
pub mod bus;

pub use bus::{MainMemory, MemoryBus};
