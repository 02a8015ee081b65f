//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image container formats known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Tagged Image File Format, either byte order
    Tiff,
}

/// Magic numbers for image format detection
mod magic {
    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// BigTIFF little-endian: II 2B 00
    pub const BIGTIFF_LE: &[u8] = &[0x49, 0x49, 0x2B, 0x00];

    /// BigTIFF big-endian: MM 00 2B
    pub const BIGTIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2B];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 4 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::TIFF_LE)
        || data.starts_with(magic::TIFF_BE)
        || data.starts_with(magic::BIGTIFF_LE)
        || data.starts_with(magic::BIGTIFF_BE)
    {
        return Ok(ImageFormat::Tiff);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}
