//! Per-instruction working record.
//!
//! This module defines the record created when a word is validated and
//! threaded through the rest of the stage chain. Each stage reads the fields
//! written by earlier stages and fills in its own; no stage clears a field a
//! previous stage produced.

use crate::isa::instruction::{Decoded, OpClass};

/// Working state of one instruction as it moves through the stages.
///
/// Only legal instructions become records: the halt and no-op sentinels are
/// consumed during classification, and validation failures fault the driver
/// before a record exists. Branches and stores finish with `result` still
/// `None`, and only loads and stores ever receive an effective address.
#[derive(Clone, Debug)]
pub struct Record {
    /// Program counter the word was fetched from.
    pub pc: u64,
    /// Fields extracted by classification.
    pub decoded: Decoded,
    /// Operation category assigned by validation.
    pub class: OpClass,
    /// First operand (`registers[rs1]` when the class reads rs1).
    pub op1: u64,
    /// Second operand (`registers[rs2]` when the class reads rs2).
    pub op2: u64,
    /// Address of the next instruction to execute.
    pub next_pc: u64,
    /// Value destined for `rd`: ALU output, link value, or loaded data.
    pub result: Option<u64>,
    /// Effective address computed for loads and stores.
    pub addr: Option<u64>,
}

impl Record {
    /// Creates the record for a freshly validated instruction.
    ///
    /// Operands, the next PC, the result, and the address all start empty;
    /// the downstream stages fill them in order.
    #[must_use]
    pub const fn new(pc: u64, decoded: Decoded, class: OpClass) -> Self {
        Self {
            pc,
            decoded,
            class,
            op1: 0,
            op2: 0,
            next_pc: 0,
            result: None,
            addr: None,
        }
    }
}
