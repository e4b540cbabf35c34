//! Execution Core.
//!
//! This module collects the architectural state and the staged engine that
//! advances it:
//!
//! 1. **State**: The program counter and register file ([`Machine`], [`Gpr`]).
//! 2. **Record**: The per-instruction working set threaded through the
//!    stages ([`Record`]).
//! 3. **Stages**: Free functions, one per engine stage, each taking exactly
//!    the state it needs ([`stages`]).
//! 4. **Units**: Pure combinational helpers shared by the stages ([`units`]).
//!
//! [`Gpr`]: gpr::Gpr
//! [`Record`]: record::Record

/// General-purpose register file.
pub mod gpr;
/// Architectural machine state.
pub mod machine;
/// Per-instruction working record.
pub mod record;
/// The staged execution engine.
pub mod stages;
/// Functional units.
pub mod units;

pub use gpr::Gpr;
pub use machine::Machine;
pub use record::Record;
