//! fastmedian-io - Image I/O for fastmedian
//!
//! Reads and writes 16-bit grayscale images. TIFF support is behind the
//! `tiff-format` feature, enabled by default.
//!
//! # Examples
//!
//! ```
//! use fastmedian_core::Gray16Image;
//! use fastmedian_io::{TiffCompression, read_tiff_gray16, write_tiff_gray16};
//! use std::io::Cursor;
//!
//! let img = Gray16Image::from_fn(4, 6, |r, k| (r * 6 + k) as u16).unwrap();
//! let mut buf = Cursor::new(Vec::new());
//! write_tiff_gray16(&img, &mut buf, TiffCompression::Lzw).unwrap();
//! buf.set_position(0);
//! assert_eq!(read_tiff_gray16(buf).unwrap(), img);
//! ```

mod error;
pub mod format;
#[cfg(feature = "tiff-format")]
pub mod tiff;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "tiff-format")]
pub use self::tiff::{
    TiffCompression, read_tiff_gray16, read_tiff_gray16_file, tiff_dimensions,
    tiff_dimensions_file, write_tiff_gray16, write_tiff_gray16_file,
};
