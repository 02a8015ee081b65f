//! Square filter masks
//!
//! A mask is the odd side length `m = 2r + 1` of the square window centred
//! on each output pixel. The window holds `m * m` samples.

use crate::{FilterError, FilterResult};

/// Largest accepted mask.
///
/// A full window holds `MAX_MASK * MAX_MASK` (about one million) samples.
/// This bounds the per-worker scratch buffer of the sort-based filter to
/// 2 MiB and the row-start build of the histogram filter to one million
/// inserts. Larger masks are rejected, never clamped.
pub const MAX_MASK: u32 = 1023;

/// Mask size used by the fixed-size legacy entry point.
pub const LEGACY_MASK: u32 = 31;

/// A validated odd, positive mask size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask(u32);

impl Mask {
    /// Validate a mask size.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMask`] if `size` is 0, even, or
    /// larger than [`MAX_MASK`]. Even sizes are never rounded.
    pub fn new(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidMask {
                mask: size,
                reason: "mask must be positive",
            });
        }
        if size % 2 == 0 {
            return Err(FilterError::InvalidMask {
                mask: size,
                reason: "mask must be odd",
            });
        }
        if size > MAX_MASK {
            return Err(FilterError::InvalidMask {
                mask: size,
                reason: "mask exceeds the largest supported window",
            });
        }
        Ok(Self(size))
    }

    /// Side length `m`.
    #[inline]
    pub fn size(self) -> u32 {
        self.0
    }

    /// Half-width `r`, with `m = 2r + 1`.
    #[inline]
    pub fn radius(self) -> u32 {
        self.0 / 2
    }

    /// Number of samples in a full window, `m * m`.
    #[inline]
    pub fn window_len(self) -> u32 {
        self.0 * self.0
    }
}

impl TryFrom<u32> for Mask {
    type Error = FilterError;

    fn try_from(size: u32) -> FilterResult<Self> {
        Mask::new(size)
    }
}
