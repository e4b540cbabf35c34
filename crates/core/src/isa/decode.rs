//! Word classification and immediate decoding.
//!
//! The first look at a fetched word happens here, in two steps:
//! 1. **Sentinel matching:** The halt and no-op words are matched against the
//!    full 32-bit encoding before any field extraction.
//! 2. **Field extraction:** Every other word has its register and function
//!    fields pulled out and its immediate reassembled according to the shape
//!    implied by the opcode.
//!
//! Classification never rejects a word; legality is decided afterwards by
//! [`crate::isa::validate`].
//!
//! # Shapes
//!
//! ```text
//!           31          25 24 20 19 15 14    12 11          7 6      0
//! R  type: | funct7       | rs2 | rs1 | funct3 | rd          | opcode |
//! I  type: | imm[11:0]          | rs1 | funct3 | rd          | opcode |
//! S  type: | imm[11:5]    | rs2 | rs1 | funct3 | imm[4:0]    | opcode |
//! SB type: | imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode |
//! U  type: | imm[31:12]                        | rd          | opcode |
//! UJ type: | imm[20|10:1|11|19:12]             | rd          | opcode |
//! ```

use crate::common::bits::{extract_bits, sign_extend};
use crate::common::constants::{HALT_WORD, NOP_WORD};
use crate::isa::instruction::{Decoded, InstructionBits, Shape};
use crate::isa::rv64i::opcodes;

/// Number of significant bits in an I- or S-shape immediate.
const IMM12_BITS: u32 = 12;
/// Number of significant bits in an SB-shape immediate (bit 0 always zero).
const IMM13_BITS: u32 = 13;
/// Number of significant bits in a UJ-shape immediate (bit 0 always zero).
const IMM21_BITS: u32 = 21;
/// Mask selecting the placed U-shape immediate (bits 31:12).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Result of classifying one fetched word.
#[derive(Clone, Debug)]
pub enum Class {
    /// The halt sentinel; simulation ends successfully.
    Halt,
    /// The canonical no-op; the PC advances without executing.
    Nop,
    /// Any other word, with its fields extracted.
    Inst(Decoded),
}

/// Classifies a fetched word.
///
/// Sentinels are matched on the full word; everything else is field-extracted
/// into a [`Decoded`] for validation.
#[must_use]
pub fn classify(word: u32) -> Class {
    match word {
        HALT_WORD => Class::Halt,
        NOP_WORD => Class::Nop,
        _ => Class::Inst(decode_fields(word)),
    }
}

/// Maps a major opcode to the shape it implies, if any.
#[must_use]
pub const fn shape_of(opcode: u32) -> Option<Shape> {
    match opcode {
        opcodes::OP_REG | opcodes::OP_REG_32 => Some(Shape::R),
        opcodes::OP_IMM | opcodes::OP_IMM_32 | opcodes::OP_LOAD | opcodes::OP_JALR => {
            Some(Shape::I)
        }
        opcodes::OP_STORE => Some(Shape::S),
        opcodes::OP_BRANCH => Some(Shape::Sb),
        opcodes::OP_LUI | opcodes::OP_AUIPC => Some(Shape::U),
        opcodes::OP_JAL => Some(Shape::Uj),
        _ => None,
    }
}

/// Extracts every field of a non-sentinel word.
fn decode_fields(word: u32) -> Decoded {
    let shape = shape_of(word.opcode());
    let imm = match shape {
        Some(Shape::I) => i_imm(word),
        Some(Shape::S) => s_imm(word),
        Some(Shape::Sb) => b_imm(word),
        Some(Shape::U) => u_imm(word),
        Some(Shape::Uj) => j_imm(word),
        // R shapes carry no immediate; unrecognized opcodes get none either.
        Some(Shape::R) | None => 0,
    };

    Decoded {
        raw: word,
        opcode: word.opcode(),
        rd: word.rd(),
        rs1: word.rs1(),
        rs2: word.rs2(),
        funct3: word.funct3(),
        funct7: word.funct7(),
        imm,
        shape,
    }
}

/// Decodes an I-shape immediate: imm[11:0] from bits 31:20, sign-extended.
fn i_imm(word: u32) -> i64 {
    sign_extend(u64::from(extract_bits(word, 31, 20)), IMM12_BITS)
}

/// Decodes an S-shape immediate: imm[11:5] from bits 31:25 and imm[4:0]
/// from bits 11:7, sign-extended.
fn s_imm(word: u32) -> i64 {
    let high = extract_bits(word, 31, 25);
    let low = extract_bits(word, 11, 7);
    sign_extend(u64::from((high << 5) | low), IMM12_BITS)
}

/// Decodes an SB-shape immediate: imm[12|10:5] from bits 31:25 and
/// imm[4:1|11] from bits 11:7, shifted into place and sign-extended.
/// Bit 0 of the result is always zero.
fn b_imm(word: u32) -> i64 {
    let bit_12 = extract_bits(word, 31, 31);
    let bits_10_5 = extract_bits(word, 30, 25);
    let bits_4_1 = extract_bits(word, 11, 8);
    let bit_11 = extract_bits(word, 7, 7);
    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(u64::from(combined), IMM13_BITS)
}

/// Decodes a U-shape immediate: bits 31:12 kept in place, low bits zero.
/// The placement is not sign-extended into the upper 32 bits.
fn u_imm(word: u32) -> i64 {
    i64::from(word & U_IMM_MASK)
}

/// Decodes a UJ-shape immediate: imm[20|10:1|11|19:12] reassembled from
/// bits 31:12, shifted into place and sign-extended. Bit 0 is always zero.
fn j_imm(word: u32) -> i64 {
    let bit_20 = extract_bits(word, 31, 31);
    let bits_10_1 = extract_bits(word, 30, 21);
    let bit_11 = extract_bits(word, 20, 20);
    let bits_19_12 = extract_bits(word, 19, 12);
    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(u64::from(combined), IMM21_BITS)
}
