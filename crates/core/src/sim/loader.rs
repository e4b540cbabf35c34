//! Program Image Loader.
//!
//! This module copies a flat binary into simulated memory. It performs:
//! 1. **Image read:** Reads the program file from disk into a byte buffer.
//! 2. **Capacity check:** Rejects images larger than the memory they load into.
//! 3. **Placement:** Writes the image one byte per increasing address from
//!    address zero. No header, relocation, or symbol handling of any kind.

use std::fs;

use tracing::debug;

use crate::common::data::AccessWidth;
use crate::common::error::SimError;
use crate::mem::Bus;

/// Loads a flat program image into memory starting at address zero.
///
/// # Arguments
///
/// * `path` - Path to the binary image file.
/// * `bus` - Memory to load the image into.
///
/// # Returns
///
/// The number of bytes copied into memory.
///
/// # Errors
///
/// Returns [`SimError::ImageRead`] when the file cannot be read and
/// [`SimError::ImageTooLarge`] when it does not fit in `bus`. A write
/// failure from the bus itself propagates as a trap.
pub fn load(path: &str, bus: &mut impl Bus) -> Result<u64, SimError> {
    let image = fs::read(path).map_err(|source| SimError::ImageRead {
        path: path.to_string(),
        source,
    })?;

    let len = image.len() as u64;
    if len > bus.size() {
        return Err(SimError::ImageTooLarge {
            path: path.to_string(),
            image: len,
            memory: bus.size(),
        });
    }

    for (addr, byte) in image.iter().enumerate() {
        bus.write(addr as u64, AccessWidth::Byte, u64::from(*byte))?;
    }

    debug!("loaded {} bytes from '{}' at address 0", len, path);
    Ok(len)
}
