//! Instruction encoding and decoding utilities.
//!
//! Provides field extraction for 32-bit instruction words together with the
//! structures the engine threads between stages:
//! 1. **`InstructionBits`:** Extraction of the fixed fields every shape shares.
//! 2. **`Shape`:** The six RV64I instruction-word layouts.
//! 3. **`OpClass`:** The validated operation category with derived capabilities.
//! 4. **`Decoded`:** All fields extracted from one classified word.

use std::fmt;

use crate::common::bits::extract_bits;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields from a
/// 32-bit instruction encoding. Field positions are fixed across all six
/// shapes, so extraction never depends on classification.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6-0).
    ///
    /// The opcode determines the instruction shape and operation category.
    /// Returns the 7-bit opcode value.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 11-7).
    ///
    /// Returns the 5-bit register index (0-31) for the destination register.
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 19-15).
    ///
    /// Returns the 5-bit register index (0-31) for the first source operand.
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 24-20).
    ///
    /// Returns the 5-bit register index (0-31) for the second source operand.
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 14-12).
    ///
    /// Used to distinguish between different operations within the same opcode.
    /// Returns the 3-bit funct3 value.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 31-25).
    ///
    /// Distinguishes standard from alternate encodings (e.g., ADD vs SUB) and
    /// holds the high seven immediate bits of shift immediates.
    /// Returns the 7-bit funct7 value.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        extract_bits(*self, 6, 0)
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        extract_bits(*self, 11, 7) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        extract_bits(*self, 19, 15) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        extract_bits(*self, 24, 20) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        extract_bits(*self, 14, 12)
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        extract_bits(*self, 31, 25)
    }
}

/// The six fixed 32-bit instruction-word layouts of RV64I.
///
/// The shape is determined entirely by the opcode and selects how the
/// immediate bits are reassembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Register-register layout (funct7, rs2, rs1, funct3, rd).
    R,
    /// Register-immediate layout (imm[11:0], rs1, funct3, rd).
    I,
    /// Store layout (imm[11:5], rs2, rs1, funct3, imm[4:0]).
    S,
    /// Branch layout (imm[12|10:5], rs2, rs1, funct3, imm[4:1|11]).
    Sb,
    /// Upper-immediate layout (imm[31:12], rd).
    U,
    /// Jump layout (imm[20|10:1|11|19:12], rd).
    Uj,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R => write!(f, "R"),
            Self::I => write!(f, "I"),
            Self::S => write!(f, "S"),
            Self::Sb => write!(f, "SB"),
            Self::U => write!(f, "U"),
            Self::Uj => write!(f, "UJ"),
        }
    }
}

/// Validated operation category, keyed by major opcode.
///
/// Replaces a set of independent capability booleans: the category is
/// assigned once by validation and every capability below is derived from
/// it, so contradictory combinations cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    /// OP-IMM: 64-bit register-immediate ALU operations.
    IntImm,
    /// OP-IMM-32: 32-bit register-immediate ALU operations.
    IntImmW,
    /// LOAD: sized memory reads into `rd`.
    Load,
    /// OP: 64-bit register-register ALU operations.
    IntReg,
    /// OP-32: 32-bit register-register ALU operations.
    IntRegW,
    /// STORE: sized memory writes from `rs2`.
    Store,
    /// BRANCH: conditional PC-relative branches.
    Branch,
    /// LUI: load upper immediate.
    Lui,
    /// AUIPC: add upper immediate to PC.
    Auipc,
    /// JAL: PC-relative jump and link.
    Jal,
    /// JALR: register-indirect jump and link.
    Jalr,
}

impl OpClass {
    /// Whether commit writes the record's result to `rd`.
    #[must_use]
    pub const fn writes_rd(self) -> bool {
        !matches!(self, Self::Store | Self::Branch)
    }

    /// Whether operand collection reads `registers[rs1]`.
    #[must_use]
    pub const fn reads_rs1(self) -> bool {
        !matches!(self, Self::Lui | Self::Auipc | Self::Jal)
    }

    /// Whether operand collection reads `registers[rs2]`.
    #[must_use]
    pub const fn reads_rs2(self) -> bool {
        matches!(self, Self::IntReg | Self::IntRegW | Self::Store | Self::Branch)
    }

    /// Whether the memory access stage performs a read.
    #[must_use]
    pub const fn reads_mem(self) -> bool {
        matches!(self, Self::Load)
    }

    /// Whether the memory access stage performs a write.
    #[must_use]
    pub const fn writes_mem(self) -> bool {
        matches!(self, Self::Store)
    }

    /// Whether the address generator produces an effective address.
    #[must_use]
    pub const fn uses_mem(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Produced by classification for every non-sentinel word. The register and
/// function fields are always extracted; the immediate is assembled per the
/// shape, and is zero for R-shaped or unrecognized opcodes.
#[derive(Clone, Debug)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value (zero-extended placement for U shapes).
    pub imm: i64,
    /// Word layout implied by the opcode; `None` for unrecognized opcodes,
    /// which validation rejects.
    pub shape: Option<Shape>,
}
