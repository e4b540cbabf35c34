//! Execution unit tests.

/// Integer ALU tests.
pub mod alu;
