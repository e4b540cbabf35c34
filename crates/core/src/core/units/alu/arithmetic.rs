//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction for both the 64-bit and the
//! 32-bit ("W") variants. Overflow wraps silently in both widths.
//!
//! All 32-bit (`is32 == true`) results are sign-extended from bit 31 to
//! 64 bits, regardless of operation.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`   - The ALU operation to perform (must be an arithmetic variant).
/// * `a`    - First operand (64-bit value).
/// * `b`    - Second operand (64-bit value).
/// * `is32` - If true, perform the 32-bit (W-suffix) variant.
///
/// # Returns
///
/// The 64-bit result. For 32-bit operations the result is sign-extended
/// from bit 31. Returns `0` for non-arithmetic opcodes.
#[must_use]
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    match op {
        AluOp::Add => {
            if is32 {
                (a as i32).wrapping_add(b as i32) as i64 as u64
            } else {
                a.wrapping_add(b)
            }
        }
        AluOp::Sub => {
            if is32 {
                (a as i32).wrapping_sub(b as i32) as i64 as u64
            } else {
                a.wrapping_sub(b)
            }
        }
        _ => 0,
    }
}
