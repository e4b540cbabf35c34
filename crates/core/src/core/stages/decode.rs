//! Classification and Validation Stage.
//!
//! This module implements the second stage of the engine. It decides what a
//! fetched word is:
//! 1. **Sentinels:** The halt and no-op words short-circuit the stage chain.
//! 2. **Instructions:** Everything else is field-extracted and checked for
//!    encoding legality; survivors receive their operation category and an
//!    open instruction record.

use tracing::debug;

use crate::common::error::Trap;
use crate::core::record::Record;
use crate::isa::decode::{Class, classify};
use crate::isa::validate::validate;

/// What the driver should do with a fetched word.
#[derive(Clone, Debug)]
pub enum DecodeOutcome {
    /// The halt sentinel: end the simulation successfully.
    Halt,
    /// The canonical no-op: advance the PC, skip the execute phase.
    Nop,
    /// A legal instruction, recorded and ready for the execute phase.
    Inst(Record),
}

/// Executes the classification and validation stage.
///
/// # Arguments
///
/// * `pc` - Program counter the word was fetched from
/// * `word` - The raw fetched word
///
/// # Errors
///
/// Returns [`Trap::IllegalInstruction`] when the word is neither a sentinel
/// nor a legal RV64I encoding.
pub fn decode_stage(pc: u64, word: u32) -> Result<DecodeOutcome, Trap> {
    match classify(word) {
        Class::Halt => Ok(DecodeOutcome::Halt),
        Class::Nop => Ok(DecodeOutcome::Nop),
        Class::Inst(decoded) => match validate(&decoded) {
            Some(class) => {
                debug!(
                    "decoded PC={:#x} raw={:#010x} opcode={:#04x} funct3={:#x} funct7={:#x} \
                     rd=x{} rs1=x{} rs2=x{} imm={:#x} shape={} class={:?}",
                    pc,
                    decoded.raw,
                    decoded.opcode,
                    decoded.funct3,
                    decoded.funct7,
                    decoded.rd,
                    decoded.rs1,
                    decoded.rs2,
                    decoded.imm,
                    decoded.shape.map_or_else(|| "?".to_string(), |s| s.to_string()),
                    class,
                );
                Ok(DecodeOutcome::Inst(Record::new(pc, decoded, class)))
            }
            None => Err(Trap::IllegalInstruction { pc, word }),
        },
    }
}
