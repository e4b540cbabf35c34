//! Execution units.
//!
//! Contains the functional units the execute stage dispatches to. A
//! functional model needs only one:
//! 1. **ALU:** Integer arithmetic, logic, and shifts in 64- and 32-bit widths.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
