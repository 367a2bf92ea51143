//! Width and height from a PNG's IHDR chunk, without decoding the image.

use crate::types::Dimensions;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const HEADER_LEN: usize = 24;

/// Parses `(width, height)` from the first 24 bytes of a PNG.
///
/// Returns `None` if the slice is short, the signature is wrong, or the first
/// chunk is not `IHDR`.
pub fn parse_ihdr(header: &[u8]) -> Option<(u32, u32)> {
    if header.len() < HEADER_LEN {
        return None;
    }
    if header[..8] != PNG_SIGNATURE || &header[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(header[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(header[20..24].try_into().ok()?);
    Some((width, height))
}

/// Reads the PNG header of `path`. I/O errors yield `None`.
pub fn png_dimensions(path: &Path) -> Option<(u32, u32)> {
    let file = File::open(path).ok()?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header).ok()?;
    parse_ihdr(&header)
}

/// Like [`png_dimensions`], distinguishing empty files from unreadable ones.
pub fn describe_dimensions(path: &Path, size: Option<u64>) -> Dimensions {
    match png_dimensions(path) {
        Some((width, height)) => Dimensions::Known { width, height },
        None if size == Some(0) => Dimensions::Empty,
        None => Dimensions::Unknown,
    }
}
