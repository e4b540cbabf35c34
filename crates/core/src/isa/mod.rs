//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, the field-extraction
//! utilities, and the classification/validation logic for the supported
//! instruction set.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit), the only extension
//!   this simulator implements.

/// Word classification and per-shape immediate decoding.
pub mod decode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;

/// Encoding legality checks performed after classification.
pub mod validate;
