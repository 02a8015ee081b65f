//! TIFF image format support
//!
//! Reads and writes single-page, single-sample 16-bit grayscale TIFFs.
//! Only strip-organised files are accepted on input; tiled layouts, other
//! bit depths and multi-sample pixels are rejected rather than converted.

use crate::{IoError, IoResult};
use fastmedian_core::Gray16Image;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype::Gray16;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Tag;

/// TIFF compression format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// PackBits compression
    PackBits,
    /// ZIP/Deflate compression
    Zip,
}

impl TiffCompression {
    /// Convert to tiff crate's Compression enum
    fn to_tiff_compression(self) -> Compression {
        match self {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::PackBits => Compression::Packbits,
            TiffCompression::Zip => Compression::Deflate(tiff::encoder::DeflateLevel::default()),
        }
    }
}

fn open_decoder<R: Read + Seek>(reader: R) -> IoResult<Decoder<R>> {
    Decoder::new(reader).map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))
}

/// Read `(rows, cols)` of the first page without decoding sample data.
pub fn tiff_dimensions<R: Read + Seek>(reader: R) -> IoResult<(u32, u32)> {
    let mut decoder = open_decoder(reader)?;
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {}", e)))?;
    Ok((height, width))
}

/// Read `(rows, cols)` of the first page of a TIFF file.
pub fn tiff_dimensions_file<P: AsRef<Path>>(path: P) -> IoResult<(u32, u32)> {
    let file = File::open(path)?;
    tiff_dimensions(BufReader::new(file))
}

/// Read the first page of a 16-bit grayscale TIFF.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for tiled files, any color type
/// other than one 16-bit gray sample, and signed or floating samples.
/// Codec failures map to [`IoError::DecodeError`].
pub fn read_tiff_gray16<R: Read + Seek>(reader: R) -> IoResult<Gray16Image> {
    let mut decoder = open_decoder(reader)?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF color type: {}", e)))?;

    if decoder.get_tag_u32(Tag::TileWidth).is_ok() {
        warn!("rejecting tiled TIFF ({}x{})", width, height);
        return Err(IoError::UnsupportedFormat(
            "tiled TIFF layout is not supported".to_string(),
        ));
    }

    if !matches!(color_type, ColorType::Gray(16)) {
        warn!("rejecting TIFF with color type {:?}", color_type);
        return Err(IoError::UnsupportedFormat(format!(
            "expected one 16-bit gray sample per pixel, found {:?}",
            color_type
        )));
    }

    debug!("reading TIFF: {} rows x {} cols", height, width);

    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF image data: {}", e)))?;

    let data = match image_data {
        DecodingResult::U16(data) => data,
        _ => {
            warn!("rejecting TIFF with non-unsigned 16-bit samples");
            return Err(IoError::UnsupportedFormat(
                "TIFF samples are not unsigned 16-bit integers".to_string(),
            ));
        }
    };

    if decoder.more_images() {
        debug!("TIFF has more pages; only the first is read");
    }

    Ok(Gray16Image::from_vec(height, width, data)?)
}

/// Read the first page of a 16-bit grayscale TIFF file.
pub fn read_tiff_gray16_file<P: AsRef<Path>>(path: P) -> IoResult<Gray16Image> {
    let file = File::open(path)?;
    read_tiff_gray16(BufReader::new(file))
}

/// Write a single-page 16-bit grayscale TIFF
///
/// # Arguments
///
/// * `image` - The image to write
/// * `writer` - The writer to write to
/// * `compression` - The compression format to use
pub fn write_tiff_gray16<W: Write + Seek>(
    image: &Gray16Image,
    writer: W,
    compression: TiffCompression,
) -> IoResult<()> {
    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| IoError::EncodeError(format!("TIFF encoder error: {}", e)))?
        .with_compression(compression.to_tiff_compression());

    debug!(
        "writing TIFF: {} rows x {} cols, {:?}",
        image.rows(),
        image.cols(),
        compression
    );

    encoder
        .write_image::<Gray16>(image.cols(), image.rows(), image.data())
        .map_err(|e| IoError::EncodeError(format!("TIFF write error: {}", e)))?;

    Ok(())
}

/// Write a single-page 16-bit grayscale TIFF file, replacing any
/// existing file at `path`.
pub fn write_tiff_gray16_file<P: AsRef<Path>>(
    image: &Gray16Image,
    path: P,
    compression: TiffCompression,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tiff_gray16(image, &mut writer, compression)?;
    writer.flush()?;
    Ok(())
}
