//! Memory Access Stage.
//!
//! This module performs the sized read or write of a load or store:
//! 1. **Loads:** Read `width` bytes at the effective address, then sign- or
//!    zero-extend per the funct3 table; the value becomes the record's result.
//! 2. **Stores:** Write the low `width` bytes of operand 2 at the effective
//!    address.
//!
//! An access outside the image faults here, after next-PC resolution but
//! before commit, so a faulting instruction changes no architectural state.

use crate::common::bits::sign_extend;
use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::Trap;
use crate::core::record::Record;
use crate::isa::instruction::OpClass;
use crate::isa::rv64i::funct3;
use crate::mem::Bus;

/// Number of bits per byte, for width-to-bits conversion.
const BITS_PER_BYTE: u32 = 8;

/// Executes the memory access stage.
///
/// Instructions without an effective address pass through untouched.
///
/// # Arguments
///
/// * `record` - Instruction record carrying the effective address
/// * `bus` - Memory to access
///
/// # Errors
///
/// Returns [`Trap::AccessFault`] when any byte of the access lies outside
/// the memory image.
pub fn memory_stage(record: &mut Record, bus: &mut impl Bus) -> Result<(), Trap> {
    let Some(addr) = record.addr else {
        return Ok(());
    };

    match record.class {
        OpClass::Load => {
            let (width, signed) = load_access(record.decoded.funct3);
            let raw = bus.read(addr, width, AccessType::Read)?;
            let value = if signed {
                sign_extend(raw, width.bytes() as u32 * BITS_PER_BYTE) as u64
            } else {
                raw
            };
            record.result = Some(value);
        }
        OpClass::Store => {
            let width = store_access(record.decoded.funct3);
            bus.write(addr, width, record.op2)?;
        }
        _ => {}
    }

    Ok(())
}

/// Maps a load funct3 to its access width and signedness.
///
/// The funct3 passed validation, so the final arm absorbs the last valid
/// encoding (LWU). LD needs no extension and is marked unsigned.
const fn load_access(f3: u32) -> (AccessWidth, bool) {
    match f3 {
        funct3::LB => (AccessWidth::Byte, true),
        funct3::LH => (AccessWidth::Half, true),
        funct3::LW => (AccessWidth::Word, true),
        funct3::LD => (AccessWidth::Double, false),
        funct3::LBU => (AccessWidth::Byte, false),
        funct3::LHU => (AccessWidth::Half, false),
        _ => (AccessWidth::Word, false),
    }
}

/// Maps a store funct3 to its access width.
///
/// The funct3 passed validation, so the final arm absorbs the last valid
/// encoding (SD).
const fn store_access(f3: u32) -> AccessWidth {
    match f3 {
        funct3::SB => AccessWidth::Byte,
        funct3::SH => AccessWidth::Half,
        funct3::SW => AccessWidth::Word,
        _ => AccessWidth::Double,
    }
}
