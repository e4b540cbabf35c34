//! Architectural Machine State.
//!
//! This module defines the `Machine` structure, the explicit container for all
//! architectural state the engine mutates:
//! 1. **Program Counter:** The address of the next word to fetch.
//! 2. **Register File:** The 32 general-purpose registers.
//!
//! The state is a plain value owned by the driver and passed into each stage,
//! so multiple independent simulator instances can coexist and individual
//! stages can be tested in isolation.

use crate::core::gpr::Gpr;

/// Architectural state of one simulated hart.
#[derive(Clone, Debug)]
pub struct Machine {
    /// Program Counter.
    pub pc: u64,
    /// General-purpose registers.
    pub regs: Gpr,
}

impl Machine {
    /// Creates machine state with all registers zeroed and the PC at `reset_pc`.
    #[must_use]
    pub const fn new(reset_pc: u64) -> Self {
        Self {
            pc: reset_pc,
            regs: Gpr::new(),
        }
    }

    /// Dumps the architectural register state to stdout.
    pub fn dump(&self) {
        println!("PC ={:#018x}", self.pc);
        self.regs.dump();
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(0)
    }
}
