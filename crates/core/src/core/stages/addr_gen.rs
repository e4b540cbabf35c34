//! Effective Address Generation Stage.
//!
//! This module computes the memory address a load or store will touch:
//! operand 1 plus the sign-extended immediate. The calculation itself never
//! faults and performs no alignment or bounds checking; judging the address
//! is the memory collaborator's contract.

use crate::core::record::Record;

/// Executes the address generation stage.
///
/// Fills the record's `addr` for loads and stores; all other categories
/// leave it empty. Address arithmetic wraps modulo 2^64.
///
/// # Arguments
///
/// * `record` - Instruction record carrying operand 1 and the immediate
pub fn addr_gen_stage(record: &mut Record) {
    if record.class.uses_mem() {
        record.addr = Some(record.op1.wrapping_add(record.decoded.imm as u64));
    }
}
