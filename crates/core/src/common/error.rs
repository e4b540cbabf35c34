//! Trap and simulation error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** The terminal runtime faults the engine can raise.
//! 2. **Simulation Errors:** Failures surfaced to an embedder before or during a run.
//! 3. **Error Handling:** Integration with standard Rust error traits for reporting.

use std::io;

use thiserror::Error;

use super::data::{AccessType, AccessWidth};

/// Terminal runtime faults raised by the engine.
///
/// A trap ends the simulation: the driver transitions to its faulted state and
/// no architectural state is modified by the faulting instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Illegal instruction fault.
    ///
    /// Raised when a fetched word fails encoding validation: unknown opcode,
    /// funct3 outside the opcode's valid set, a bad funct7, malformed
    /// shift-immediate high bits, or a nonzero `jalr` funct3.
    #[error("illegal instruction {word:#010x} at PC {pc:#x}")]
    IllegalInstruction {
        /// Program counter of the faulting word.
        pc: u64,
        /// The raw fetched word.
        word: u32,
    },

    /// Memory access fault.
    ///
    /// Raised when any byte of an access falls outside the memory image.
    /// Addresses never wrap; an access past the end of the image is an error,
    /// not an alias of a lower address.
    #[error("{width}-byte {access} at address {addr:#x} is outside the memory image")]
    AccessFault {
        /// What kind of access faulted.
        access: AccessType,
        /// Base address of the access.
        addr: u64,
        /// Width of the access.
        width: AccessWidth,
    },

    /// Step limit exhausted.
    ///
    /// Raised when the configured instruction bound is reached before the
    /// program halts. A limit of zero disables the bound entirely.
    #[error("step limit of {limit} instructions reached at PC {pc:#x}")]
    StepLimit {
        /// Program counter at the time the limit was hit.
        pc: u64,
        /// The configured bound.
        limit: u64,
    },
}

/// Errors surfaced to an embedder of the simulator.
///
/// These wrap the failures that happen around a run (reading the program
/// image, parsing configuration) together with the runtime traps above.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read from disk.
    #[error("could not read program image '{path}': {source}")]
    ImageRead {
        /// Path of the image file.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The program image does not fit in the configured memory.
    #[error("program image '{path}' is {image} bytes but memory holds {memory}")]
    ImageTooLarge {
        /// Path of the image file.
        path: String,
        /// Size of the image in bytes.
        image: u64,
        /// Size of the memory in bytes.
        memory: u64,
    },

    /// The configuration file could not be read from disk.
    #[error("could not read config file '{path}': {source}")]
    ConfigRead {
        /// Path of the config file.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The configuration file is not valid JSON for the config schema.
    #[error("invalid config file '{path}': {source}")]
    ConfigParse {
        /// Path of the config file.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A runtime trap ended the simulation.
    #[error(transparent)]
    Trap(#[from] Trap),
}
