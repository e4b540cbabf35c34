//! Global Simulator Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Sentinel Words:** Full 32-bit patterns recognized before normal decoding.
//! 2. **Instruction Constants:** Width of a fetch and the sequential PC step.
//! 3. **Register Constants:** Size of the general-purpose register file.

/// Sentinel word that terminates simulation successfully.
///
/// Matched against the full fetched word before any field extraction; it does
/// not correspond to a legal RV64I encoding.
pub const HALT_WORD: u32 = 0xFEED_FEED;

/// The canonical no-op encoding (`addi x0, x0, 0`).
///
/// Matched as a full word during classification so that it advances the PC
/// without entering the execute phase.
pub const NOP_WORD: u32 = 0x0000_0013;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of general-purpose registers in RV64I.
pub const GPR_COUNT: usize = 32;

/// Size of a doubleword in bytes, the stride of the memory dump.
pub const DOUBLEWORD_SIZE: u64 = 8;
