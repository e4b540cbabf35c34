//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute stage.
//! It handles standard arithmetic, logical operations, and shifts for
//! both 32-bit ("W") and 64-bit operands.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// Integer ALU operation selector.
///
/// Derived by the execute stage from the funct3/funct7 fields of a validated
/// instruction; one selector covers both the register and immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,
    /// Bitwise exclusive OR.
    Xor,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements the RV64I integer operations: addition, subtraction, shifts,
/// comparisons, and bitwise logic, each in a 64-bit and a 32-bit variant.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    /// Supports both 32-bit and 64-bit operations based on the `is32` flag.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `a`    - First operand (64-bit value)
    /// * `b`    - Second operand (64-bit value, also used as shift amount)
    /// * `is32` - If true, perform the 32-bit ("W") variant
    ///
    /// # Returns
    ///
    /// The 64-bit result of the ALU operation. For 32-bit operations the
    /// result is computed on the low 32 bits and sign-extended to 64 bits,
    /// for every operation including logical right shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv64sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// // 64-bit addition
    /// let result = Alu::execute(AluOp::Add, 42, 8, false);
    /// assert_eq!(result, 50);
    ///
    /// // 32-bit addition with sign extension
    /// let result = Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1, true);
    /// assert_eq!(result, 0xFFFF_FFFF_8000_0000);
    ///
    /// // Logical shift left
    /// let result = Alu::execute(AluOp::Sll, 0x1, 4, false);
    /// assert_eq!(result, 0x10);
    ///
    /// // Signed comparison
    /// let result = Alu::execute(AluOp::Slt, -5_i64 as u64, 10, false);
    /// assert_eq!(result, 1); // -5 < 10
    /// ```
    #[must_use]
    pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
        match op {
            // Arithmetic: add, sub
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b, is32),

            // Logic / comparisons: or, and, xor, slt, sltu
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b, is32)
            }

            // Shifts: sll, srl, sra
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, is32),
        }
    }
}
