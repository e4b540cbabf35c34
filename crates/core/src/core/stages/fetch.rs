//! Instruction Fetch Stage.
//!
//! This module implements the first stage of the engine. It reads the 32-bit
//! word addressed by the current program counter through the memory bus; a
//! fetch outside the image is an access fault like any other, and ends the
//! simulation.

use tracing::trace;

use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::Trap;
use crate::core::machine::Machine;
use crate::mem::Bus;

/// Executes the instruction fetch stage.
///
/// Reads one word from the bus at the machine's current PC. The PC itself
/// is not advanced here; the successor address is decided by the next-PC
/// stage once the instruction is classified.
///
/// # Arguments
///
/// * `machine` - Architectural state supplying the PC
/// * `bus` - Memory to fetch through
///
/// # Errors
///
/// Returns [`Trap::AccessFault`] when the word at the PC does not lie fully
/// inside the memory image.
pub fn fetch_stage(machine: &Machine, bus: &impl Bus) -> Result<u32, Trap> {
    let word = bus.read(machine.pc, AccessWidth::Word, AccessType::Fetch)? as u32;
    trace!("fetched {:#010x} at PC={:#x}", word, machine.pc);
    Ok(word)
}
