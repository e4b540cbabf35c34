//! RISC-V Base Integer Instruction Set (I).
//!
//! Defines the encoding tables for the RV64I subset this simulator executes:
//! integer ALU operations, loads, stores, branches, and jumps, without the
//! CSR, environment, or fence instructions.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type instructions and shift immediates.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
