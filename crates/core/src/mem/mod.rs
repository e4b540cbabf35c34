//! Byte-Addressable Memory Image.
//!
//! This module implements the memory collaborator of the engine. It provides:
//! 1. **`Bus`:** The access contract the stages are written against.
//! 2. **`Memory`:** A flat, zero-based, little-endian image of fixed capacity.
//!
//! The contract is deliberately strict: any access whose final byte falls
//! outside the image faults with the address, width, and access kind, and
//! addresses never wrap. Alignment is not checked; RV64I here permits
//! unaligned data access.

use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::Trap;

/// Access contract between the engine and its memory collaborator.
///
/// The engine performs every fetch, load, and store through this trait, so
/// tests can substitute an implementation that injects faults at chosen
/// addresses.
pub trait Bus {
    /// Returns the addressable capacity in bytes.
    fn size(&self) -> u64;

    /// Reads `width` bytes at `addr`, little-endian, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AccessFault`] when any byte of the access lies outside
    /// the image.
    fn read(&self, addr: u64, width: AccessWidth, access: AccessType) -> Result<u64, Trap>;

    /// Writes the low `width` bytes of `value` at `addr`, little-endian.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AccessFault`] when any byte of the access lies outside
    /// the image.
    fn write(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), Trap>;
}

/// Flat memory image backing a simulated machine.
///
/// The image starts at address zero, is zero-initialized, and holds both the
/// program text and its data. All multi-byte values are little-endian.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Backing storage.
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled image of `size` bytes.
    #[must_use]
    pub fn new(size: u64) -> Self {
        Self {
            data: vec![0u8; size as usize],
        }
    }

    /// Checks that the whole access stays inside the image.
    ///
    /// Returns the backing-store offset of the first byte. `checked_add`
    /// keeps an access near `u64::MAX` from wrapping back into range.
    #[inline]
    fn check_bounds(
        &self,
        addr: u64,
        width: AccessWidth,
        access: AccessType,
    ) -> Result<usize, Trap> {
        match addr.checked_add(width.bytes()) {
            Some(end) if end <= self.data.len() as u64 => Ok(addr as usize),
            _ => Err(Trap::AccessFault {
                access,
                addr,
                width,
            }),
        }
    }
}

impl Bus for Memory {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read(&self, addr: u64, width: AccessWidth, access: AccessType) -> Result<u64, Trap> {
        let offset = self.check_bounds(addr, width, access)?;
        let n = width.bytes() as usize;
        let mut bytes = [0u8; 8];
        bytes[..n].copy_from_slice(&self.data[offset..offset + n]);
        Ok(u64::from_le_bytes(bytes))
    }

    fn write(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), Trap> {
        let offset = self.check_bounds(addr, width, AccessType::Write)?;
        let n = width.bytes() as usize;
        self.data[offset..offset + n].copy_from_slice(&value.to_le_bytes()[..n]);
        Ok(())
    }
}
