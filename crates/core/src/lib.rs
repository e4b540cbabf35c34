//! RV64I functional simulator library.
//!
//! This crate implements a functional (non-cycle-accurate) simulator for the
//! RV64I base integer instruction set, without CSR, environment, or fence
//! instructions. It provides:
//! 1. **Core:** Staged engine (fetch, decode, operands, next PC, execute,
//!    address generation, memory, commit), machine state, and register file.
//! 2. **ISA:** Bit extraction, classification into the six encoding shapes,
//!    and per-opcode legality validation.
//! 3. **Memory:** A flat, bounds-checked, byte-addressable image behind a
//!    replaceable bus trait.
//! 4. **Simulation:** Program loader, instruction driver, configuration, and
//!    statistics collection.

/// Common types and constants (sentinels, bit helpers, access types, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures, JSON loading).
pub mod config;
/// Execution core (machine state, register file, record, stages, ALU).
pub mod core;
/// Instruction set (bit fields, shapes, opcode tables, decode, validation).
pub mod isa;
/// Byte-addressable memory image and the bus contract.
pub mod mem;
/// Program loader and the top-level instruction driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Architectural state (PC and registers) owned by the driver.
pub use crate::core::Machine;
/// Top-level driver; construct with `Simulator::new` and call `run`.
pub use crate::sim::Simulator;
