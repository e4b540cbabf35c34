//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Naming the access kind and width in an access fault.
//! 2. **Bounds Checking:** Sizing the final byte of an access against the image.
//! 3. **Statistics Tracking:** Categorizing memory operations in the run report.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when an access is checked against the bounds of the memory image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access, performed by the fetch stage.
    Fetch,

    /// Data read access, performed by load instructions.
    Read,

    /// Data write access, performed by store instructions.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "load"),
            Self::Write => write!(f, "store"),
        }
    }
}

/// Width of a single memory access.
///
/// RV64I moves data in four sizes; the width plus the base address determines
/// the final byte touched by an access, which is what the bounds check uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// 8-bit access (`lb`, `lbu`, `sb`).
    Byte,

    /// 16-bit access (`lh`, `lhu`, `sh`).
    Half,

    /// 32-bit access (`lw`, `lwu`, `sw`, and instruction fetches).
    Word,

    /// 64-bit access (`ld`, `sd`).
    Double,
}

impl AccessWidth {
    /// Returns the access size in bytes.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}
