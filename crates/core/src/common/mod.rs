//! Common utilities and types used throughout the RV64I simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Bit Manipulation:** Field extraction and sign extension for instruction decoding.
//! 2. **Constants:** Sentinel words, instruction width, and register file size.
//! 3. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 4. **Error Handling:** Runtime traps and embedding-level error types.

/// Bit extraction and sign extension helpers.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type and width definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

pub use constants::{HALT_WORD, NOP_WORD};
pub use data::{AccessType, AccessWidth};
pub use error::{SimError, Trap};
