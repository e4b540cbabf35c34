//! ALU Logic and Comparison Tests.
//!
//! Bitwise OR, AND, XOR, and the two set-less-than forms. The bitwise
//! operations have no "W" variants; the comparisons do, and they consider
//! only the low 32 bits of each operand.

use rv64sim_core::core::units::alu::{Alu, AluOp};

// ─── Constants ───────────────────────────────────────────

const ZERO: u64 = 0;
const ONE: u64 = 1;
const NEG1: u64 = -1i64 as u64; // 0xFFFF_FFFF_FFFF_FFFF

const I64_MAX: u64 = i64::MAX as u64;
const I64_MIN: u64 = i64::MIN as u64;
const U64_MAX: u64 = u64::MAX;

const ALTERNATING_A: u64 = 0xAAAA_AAAA_AAAA_AAAA;
const ALTERNATING_5: u64 = 0x5555_5555_5555_5555;

// ─── Helper ──────────────────────────────────────────────

/// Execute an ALU operation. Thin wrapper to keep test lines short.
fn alu(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    Alu::execute(op, a, b, is32)
}

// ══════════════════════════════════════════════════════════
//  OR
// ══════════════════════════════════════════════════════════

#[test]
fn or_with_zero_is_identity() {
    assert_eq!(alu(AluOp::Or, 0xDEAD_BEEF, ZERO, false), 0xDEAD_BEEF);
}

#[test]
fn or_with_all_ones_saturates() {
    assert_eq!(alu(AluOp::Or, 0x1234, U64_MAX, false), U64_MAX);
}

#[test]
fn or_alternating_patterns_fill() {
    assert_eq!(alu(AluOp::Or, ALTERNATING_A, ALTERNATING_5, false), U64_MAX);
}

#[test]
fn or_is_idempotent() {
    assert_eq!(alu(AluOp::Or, 0xCAFE, 0xCAFE, false), 0xCAFE);
}

// ══════════════════════════════════════════════════════════
//  AND
// ══════════════════════════════════════════════════════════

#[test]
fn and_with_zero_clears() {
    assert_eq!(alu(AluOp::And, 0xDEAD_BEEF, ZERO, false), 0);
}

#[test]
fn and_with_all_ones_is_identity() {
    assert_eq!(alu(AluOp::And, 0x1234, U64_MAX, false), 0x1234);
}

#[test]
fn and_alternating_patterns_clear() {
    assert_eq!(alu(AluOp::And, ALTERNATING_A, ALTERNATING_5, false), 0);
}

#[test]
fn and_extracts_mask() {
    assert_eq!(alu(AluOp::And, 0xABCD_EF12, 0xFF00, false), 0xEF00);
}

// ══════════════════════════════════════════════════════════
//  XOR
// ══════════════════════════════════════════════════════════

#[test]
fn xor_with_self_is_zero() {
    assert_eq!(alu(AluOp::Xor, 0xDEAD_BEEF, 0xDEAD_BEEF, false), 0);
}

#[test]
fn xor_with_zero_is_identity() {
    assert_eq!(alu(AluOp::Xor, 0x1234, ZERO, false), 0x1234);
}

#[test]
fn xor_with_all_ones_complements() {
    assert_eq!(alu(AluOp::Xor, ALTERNATING_A, U64_MAX, false), ALTERNATING_5);
}

#[test]
fn xor_alternating_patterns_fill() {
    assert_eq!(alu(AluOp::Xor, ALTERNATING_A, ALTERNATING_5, false), U64_MAX);
}

// ══════════════════════════════════════════════════════════
//  SLT (signed)
// ══════════════════════════════════════════════════════════

#[test]
fn slt_less_is_one() {
    assert_eq!(alu(AluOp::Slt, 3, 7, false), 1);
}

#[test]
fn slt_greater_is_zero() {
    assert_eq!(alu(AluOp::Slt, 7, 3, false), 0);
}

#[test]
fn slt_equal_is_zero() {
    assert_eq!(alu(AluOp::Slt, 5, 5, false), 0);
}

#[test]
fn slt_negative_less_than_positive() {
    assert_eq!(alu(AluOp::Slt, NEG1, ZERO, false), 1);
    assert_eq!(alu(AluOp::Slt, ZERO, NEG1, false), 0);
}

#[test]
fn slt_signed_boundaries() {
    assert_eq!(alu(AluOp::Slt, I64_MIN, I64_MAX, false), 1);
    assert_eq!(alu(AluOp::Slt, I64_MAX, I64_MIN, false), 0);
}

#[test]
fn slt32_compares_low_word_only() {
    // Low words: 1 < 2, even though the full first operand is far larger.
    let a = 0xFFFF_FFFF_0000_0001;
    assert_eq!(alu(AluOp::Slt, a, 2, true), 1);
}

// ══════════════════════════════════════════════════════════
//  SLTU (unsigned)
// ══════════════════════════════════════════════════════════

#[test]
fn sltu_less_is_one() {
    assert_eq!(alu(AluOp::Sltu, ZERO, ONE, false), 1);
}

#[test]
fn sltu_equal_is_zero() {
    assert_eq!(alu(AluOp::Sltu, 9, 9, false), 0);
}

#[test]
fn sltu_neg1_is_largest() {
    // As an unsigned value, all-ones beats everything.
    assert_eq!(alu(AluOp::Sltu, NEG1, ZERO, false), 0);
    assert_eq!(alu(AluOp::Sltu, ZERO, NEG1, false), 1);
}

#[test]
fn sltu32_compares_low_word_only() {
    let a = 0xFFFF_FFFF_0000_0001;
    assert_eq!(alu(AluOp::Sltu, a, 2, true), 1);
    // Low word of b is zero, so nothing is below it.
    let b = 0x0000_0001_0000_0000;
    assert_eq!(alu(AluOp::Sltu, ZERO, b, true), 0);
}

// ══════════════════════════════════════════════════════════
//  Width flag on bitwise operations
// ══════════════════════════════════════════════════════════

#[test]
fn bitwise_ops_ignore_width_flag() {
    // No "W" bitwise forms exist; the flag must not truncate these.
    assert_eq!(
        alu(AluOp::Or, ALTERNATING_A, ALTERNATING_5, true),
        U64_MAX
    );
    assert_eq!(alu(AluOp::And, U64_MAX, ALTERNATING_A, true), ALTERNATING_A);
    assert_eq!(alu(AluOp::Xor, ALTERNATING_A, U64_MAX, true), ALTERNATING_5);
}
