//! Bit-Level Manipulation Helpers.
//!
//! Every piece of instruction decoding in the simulator is built from the two
//! operations defined here:
//! 1. **Extraction:** Pulling a contiguous bit field out of a fetched word.
//! 2. **Sign Extension:** Reinterpreting the low bits of a value as a two's
//!    complement quantity of a given width.

/// Extracts the inclusive bit range `[high:low]` from an instruction word.
///
/// The extracted field is returned right-aligned with all higher bits cleared.
///
/// # Examples
///
/// ```
/// use rv64sim_core::common::bits::extract_bits;
///
/// // Opcode field of `addi x1, x0, 1` (0x00100093).
/// assert_eq!(extract_bits(0x0010_0093, 6, 0), 0b001_0011);
/// ```
#[must_use]
#[inline(always)]
pub const fn extract_bits(word: u32, high: u32, low: u32) -> u32 {
    let width = high - low + 1;
    let mask = ((1u64 << width) - 1) as u32;
    (word >> low) & mask
}

/// Sign-extends the low `width` bits of `value` to a full 64-bit integer.
///
/// Bits above `width` in the input are ignored; bit `width - 1` becomes the
/// sign bit of the result.
///
/// # Examples
///
/// ```
/// use rv64sim_core::common::bits::sign_extend;
///
/// assert_eq!(sign_extend(0xFFF, 12), -1);
/// assert_eq!(sign_extend(0x7FF, 12), 2047);
/// ```
#[must_use]
#[inline(always)]
pub const fn sign_extend(value: u64, width: u32) -> i64 {
    let shift = 64 - width;
    ((value << shift) as i64) >> shift
}
