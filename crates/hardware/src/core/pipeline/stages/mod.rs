//! Pipeline stage implementations.
//!
//! Each stage is a value owning the buffers it carries from its propagate
//! phase to its clock pulse. The simulator passes each stage exactly the
//! pieces of shared state it may touch, which keeps the phase discipline
//! (propagate reads, pulse writes) mechanical.

/// Instruction decode (ID).
pub mod decode;

/// Execute (EX).
pub mod execute;

/// Instruction fetch (IF).
pub mod fetch;

/// Memory access (M).
pub mod memory;

/// Writeback (WB).
pub mod writeback;

pub use decode::DecodeStage;
pub use execute::ExecuteStage;
pub use fetch::FetchStage;
pub use memory::MemoryStage;
pub use writeback::WriteBackStage;
