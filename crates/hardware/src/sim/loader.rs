//! Program loading.
//!
//! Reads a flat binary image from disk and places it into the memory bus
//! before execution starts. The image is raw little-endian instruction
//! words; there is no object-format parsing.

use crate::common::error::SimError;
use crate::soc::bus::MainMemory;
use std::fs;
use std::io;
use std::path::Path;

/// Reads a flat binary image from disk.
///
/// # Errors
///
/// Propagates the underlying I/O error when the file cannot be read.
pub fn read_image(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Places a program image into memory at the given base address.
///
/// # Errors
///
/// Returns [`SimError::BusFault`] when the image does not fit in the
/// mapped region.
pub fn load_image(memory: &mut MainMemory, image: &[u8], base: u64) -> Result<(), SimError> {
    memory.load_at(image, base)
}
