//! ALU Execution Stage.
//!
//! This module computes the value an instruction contributes to its
//! destination register:
//! 1. **ALU categories:** Dispatch to the ALU with operands selected by the
//!    operation's form (register or immediate) and width (64- or 32-bit).
//! 2. **Upper immediates:** LUI passes the placed immediate through; AUIPC
//!    adds it to the instruction's own PC.
//! 3. **Jumps:** Both JAL and JALR produce the link value PC + 4.
//!
//! Branches and stores produce no result; loads receive theirs from the
//! memory stage.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::record::Record;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::rv64i::{funct3, funct7};

/// Executes the ALU stage.
///
/// Fills the record's `result` for every category that writes `rd` except
/// loads. The immediate forms feed the sign-extended immediate as the second
/// ALU operand; shift immediates carry their shift amount in its low bits.
///
/// # Arguments
///
/// * `record` - Instruction record carrying operands, immediate, and PC
pub fn execute_stage(record: &mut Record) {
    let imm = record.decoded.imm as u64;
    record.result = match record.class {
        OpClass::IntImm => {
            let op = select_op(&record.decoded, false);
            Some(Alu::execute(op, record.op1, imm, false))
        }
        OpClass::IntImmW => {
            let op = select_op(&record.decoded, false);
            Some(Alu::execute(op, record.op1, imm, true))
        }
        OpClass::IntReg => {
            let op = select_op(&record.decoded, true);
            Some(Alu::execute(op, record.op1, record.op2, false))
        }
        OpClass::IntRegW => {
            let op = select_op(&record.decoded, true);
            Some(Alu::execute(op, record.op1, record.op2, true))
        }
        OpClass::Lui => Some(imm),
        OpClass::Auipc => Some(record.pc.wrapping_add(imm)),
        OpClass::Jal | OpClass::Jalr => Some(record.pc.wrapping_add(INSTRUCTION_SIZE)),
        OpClass::Load | OpClass::Store | OpClass::Branch => None,
    };
}

/// Maps funct3/funct7 to the ALU operation.
///
/// In the immediate form ADD never becomes SUB: bits 31:25 there belong to
/// the immediate, not to funct7. Right shifts consult the same bits in both
/// forms, which validation has already constrained to the two legal
/// patterns. The funct3 passed validation, so the final arm absorbs the
/// last valid encoding (AND).
fn select_op(inst: &Decoded, reg_form: bool) -> AluOp {
    match inst.funct3 {
        funct3::ADD_SUB => {
            if reg_form && inst.funct7 == funct7::SUB {
                AluOp::Sub
            } else {
                AluOp::Add
            }
        }
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA => {
            if inst.funct7 == funct7::SRA {
                AluOp::Sra
            } else {
                AluOp::Srl
            }
        }
        funct3::OR => AluOp::Or,
        _ => AluOp::And,
    }
}
