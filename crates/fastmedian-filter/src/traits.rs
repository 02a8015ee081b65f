//! Common interface for median filter implementations

use crate::FilterResult;
use fastmedian_core::{Gray16Image, ImageView};

/// A square-window median filter over 16-bit grayscale images.
///
/// Implementations must agree exactly: for the same image and mask every
/// implementation returns the same samples. Out-of-range neighbours are
/// read with the clamp-to-edge rule, and even window counts never occur
/// because masks are odd.
pub trait MedianFilter {
    /// Short identifier used in logs and test messages.
    fn name(&self) -> &'static str;

    /// Filter `image` with a `mask x mask` window.
    ///
    /// The output has the dimensions of the input. The input is never
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMask`](crate::FilterError::InvalidMask)
    /// if `mask` is zero, even, or larger than [`MAX_MASK`](crate::MAX_MASK).
    fn filter(&self, image: &ImageView<'_>, mask: u32) -> FilterResult<Gray16Image>;
}
