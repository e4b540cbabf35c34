//! Next-PC Resolution Stage.
//!
//! This module decides where execution continues after the current
//! instruction:
//! 1. **Branches:** Evaluate the funct3-selected comparison on the two
//!    operands; taken branches target PC + immediate.
//! 2. **Jumps:** JAL targets PC + immediate; JALR targets operand 1 +
//!    immediate with bit 0 cleared.
//! 3. **Everything else:** The sequential successor PC + 4.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::record::Record;
use crate::isa::instruction::OpClass;
use crate::isa::rv64i::funct3;

/// Mask clearing bit 0 of a JALR target address.
const JALR_TARGET_MASK: u64 = !1;

/// Executes the next-PC resolution stage.
///
/// Fills the record's `next_pc`. Target arithmetic wraps modulo 2^64; it is
/// the memory access, not the address calculation, that can fault.
///
/// # Arguments
///
/// * `record` - Instruction record carrying the operands and immediate
pub fn next_pc_stage(record: &mut Record) {
    let imm = record.decoded.imm as u64;
    record.next_pc = match record.class {
        OpClass::Branch => {
            if branch_taken(record.decoded.funct3, record.op1, record.op2) {
                record.pc.wrapping_add(imm)
            } else {
                record.pc.wrapping_add(INSTRUCTION_SIZE)
            }
        }
        OpClass::Jal => record.pc.wrapping_add(imm),
        OpClass::Jalr => record.op1.wrapping_add(imm) & JALR_TARGET_MASK,
        _ => record.pc.wrapping_add(INSTRUCTION_SIZE),
    };
}

/// Evaluates a branch comparison.
///
/// The funct3 has already passed validation, so the final arm can absorb the
/// last valid encoding (BGEU). The driver reuses this to classify taken and
/// not-taken branches for statistics.
#[must_use]
pub fn branch_taken(f3: u32, a: u64, b: u64) -> bool {
    match f3 {
        funct3::BEQ => a == b,
        funct3::BNE => a != b,
        funct3::BLT => (a as i64) < (b as i64),
        funct3::BGE => (a as i64) >= (b as i64),
        funct3::BLTU => a < b,
        _ => a >= b,
    }
}
