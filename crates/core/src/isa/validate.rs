//! Encoding legality checks.
//!
//! Validation runs on every classified instruction word and decides whether
//! the encoding is legal:
//! 1. **Opcode membership:** The opcode must map to a known shape.
//! 2. **funct3 membership:** The funct3 must belong to the opcode's valid set.
//! 3. **funct7 rules:** Register-register encodings and shift immediates must
//!    carry one of the two recognized funct7 patterns.
//!
//! A word that passes receives its [`OpClass`], from which every capability
//! the later stages consult is derived. A word that fails faults the driver
//! with an illegal-instruction trap; no architectural state changes.

use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::rv64i::{funct3, funct7, opcodes};

/// Validates a classified word, returning its operation category.
///
/// Returns `None` when the encoding is illegal: unknown opcode, funct3
/// outside the opcode's set, a funct7 that matches neither recognized
/// pattern, malformed shift-immediate high bits, or a nonzero JALR funct3.
#[must_use]
pub fn validate(inst: &Decoded) -> Option<OpClass> {
    let class = match inst.opcode {
        opcodes::OP_IMM => {
            if !imm_alu_legal(inst) {
                return None;
            }
            OpClass::IntImm
        }
        opcodes::OP_IMM_32 => {
            if !imm_alu_w_legal(inst) {
                return None;
            }
            OpClass::IntImmW
        }
        opcodes::OP_LOAD => {
            // All funct3 values except 0b111 name a load width.
            if inst.funct3 == 0b111 {
                return None;
            }
            OpClass::Load
        }
        opcodes::OP_REG => {
            if !reg_alu_legal(inst) {
                return None;
            }
            OpClass::IntReg
        }
        opcodes::OP_REG_32 => {
            if !reg_alu_w_legal(inst) {
                return None;
            }
            OpClass::IntRegW
        }
        opcodes::OP_STORE => {
            let stores = [funct3::SB, funct3::SH, funct3::SW, funct3::SD];
            if !stores.contains(&inst.funct3) {
                return None;
            }
            OpClass::Store
        }
        opcodes::OP_BRANCH => {
            let branches = [
                funct3::BEQ,
                funct3::BNE,
                funct3::BLT,
                funct3::BGE,
                funct3::BLTU,
                funct3::BGEU,
            ];
            if !branches.contains(&inst.funct3) {
                return None;
            }
            OpClass::Branch
        }
        opcodes::OP_LUI => OpClass::Lui,
        opcodes::OP_AUIPC => OpClass::Auipc,
        opcodes::OP_JAL => OpClass::Jal,
        opcodes::OP_JALR => {
            if inst.funct3 != funct3::JALR {
                return None;
            }
            OpClass::Jalr
        }
        _ => return None,
    };

    Some(class)
}

/// Legality of the OP-IMM group: every funct3 is an operation, and the two
/// shift encodings constrain the high seven immediate bits.
fn imm_alu_legal(inst: &Decoded) -> bool {
    match inst.funct3 {
        funct3::SLL => inst.funct7 == funct7::DEFAULT,
        funct3::SRL_SRA => shift_high_bits_legal(inst.funct7),
        funct3::ADD_SUB
        | funct3::SLT
        | funct3::SLTU
        | funct3::XOR
        | funct3::OR
        | funct3::AND => true,
        _ => false,
    }
}

/// Legality of the OP-IMM-32 group: only add and the shifts exist, with the
/// same high-bit constraints as their 64-bit counterparts.
fn imm_alu_w_legal(inst: &Decoded) -> bool {
    match inst.funct3 {
        funct3::ADD_SUB => true,
        funct3::SLL => inst.funct7 == funct7::DEFAULT,
        funct3::SRL_SRA => shift_high_bits_legal(inst.funct7),
        _ => false,
    }
}

/// Legality of the OP group: funct7 must be the default pattern, except for
/// add/sub and the right shifts where the alternate pattern selects
/// subtract/arithmetic.
fn reg_alu_legal(inst: &Decoded) -> bool {
    match inst.funct3 {
        funct3::ADD_SUB | funct3::SRL_SRA => {
            inst.funct7 == funct7::DEFAULT || inst.funct7 == funct7::SUB
        }
        funct3::SLL
        | funct3::SLT
        | funct3::SLTU
        | funct3::XOR
        | funct3::OR
        | funct3::AND => inst.funct7 == funct7::DEFAULT,
        _ => false,
    }
}

/// Legality of the OP-32 group: add/sub and the three shifts only.
fn reg_alu_w_legal(inst: &Decoded) -> bool {
    match inst.funct3 {
        funct3::ADD_SUB | funct3::SRL_SRA => {
            inst.funct7 == funct7::DEFAULT || inst.funct7 == funct7::SUB
        }
        funct3::SLL => inst.funct7 == funct7::DEFAULT,
        _ => false,
    }
}

/// A right-shift immediate is legal with high bits `0000000` (logical) or
/// `0100000` (arithmetic); anything else is a malformed encoding.
const fn shift_high_bits_legal(high_bits: u32) -> bool {
    high_bits == funct7::DEFAULT || high_bits == funct7::SRA
}
