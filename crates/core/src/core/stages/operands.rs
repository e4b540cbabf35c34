//! Operand Collection Stage.
//!
//! This module implements the register-read stage of the engine. It copies
//! the source register values an operation needs into the instruction
//! record. Reading has no side effects and cannot fail; registers not named
//! by the operation's category are left at zero in the record.

use tracing::debug;

use crate::core::gpr::Gpr;
use crate::core::record::Record;

/// Executes the operand collection stage.
///
/// Reads `registers[rs1]` into operand 1 and `registers[rs2]` into operand 2
/// when the operation's category consumes them.
///
/// # Arguments
///
/// * `record` - Instruction record to fill
/// * `regs` - Register file to read from
pub fn operand_stage(record: &mut Record, regs: &Gpr) {
    if record.class.reads_rs1() {
        record.op1 = regs.read(record.decoded.rs1);
        debug!("operand rs1(x{}) = {:#x}", record.decoded.rs1, record.op1);
    }
    if record.class.reads_rs2() {
        record.op2 = regs.read(record.decoded.rs2);
        debug!("operand rs2(x{}) = {:#x}", record.decoded.rs2, record.op2);
    }
}
