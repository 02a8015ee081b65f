//! fastmedian-filter - Median filtering of 16-bit grayscale images
//!
//! This crate provides two interchangeable square-window median filters:
//!
//! - [`SlidingHistogramMedianFilter`]: keeps a 65536-bucket histogram per
//!   row and updates it by one column on each step
//! - [`NaiveMedianFilter`]: gathers and sorts every window, used as the
//!   reference for the histogram filter
//!
//! Both read neighbours outside the image with the clamp-to-edge rule and
//! return a new image of the same dimensions.
//!
//! # Examples
//!
//! ```
//! use fastmedian_core::Gray16Image;
//! use fastmedian_filter::{MedianFilterOptions, median_filter};
//!
//! let img = Gray16Image::from_vec(3, 3, (1..=9).collect()).unwrap();
//! let out = median_filter(&img.view(), 3, &MedianFilterOptions::default()).unwrap();
//! assert_eq!(out.get(1, 1), Some(5));
//! assert_eq!(out.get(0, 0), Some(2));
//! ```

mod error;
pub mod histogram;
pub mod mask;
pub mod median;
pub mod naive;
pub mod options;
mod rows;
pub mod sliding;
pub mod traits;

pub use error::{ErrorKind, FilterError, FilterResult};
pub use histogram::Histogram;
pub use mask::{LEGACY_MASK, MAX_MASK, Mask};
pub use median::median_of;
pub use naive::NaiveMedianFilter;
pub use options::{Execution, MedianFilterOptions, MedianMethod};
pub use sliding::SlidingHistogramMedianFilter;
pub use traits::MedianFilter;

use fastmedian_core::{Gray16Image, ImageView};

/// Median filter `image` with the algorithm and scheduling in `options`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidMask`] for a zero, even, or oversized mask.
pub fn median_filter(
    image: &ImageView<'_>,
    mask: u32,
    options: &MedianFilterOptions,
) -> FilterResult<Gray16Image> {
    match options.method {
        MedianMethod::Naive => {
            NaiveMedianFilter::with_execution(options.execution).filter(image, mask)
        }
        MedianMethod::SlidingHistogram => {
            SlidingHistogramMedianFilter::with_execution(options.execution).filter(image, mask)
        }
    }
}

/// Sort-based median filter with default execution.
pub fn median_filter_naive(image: &ImageView<'_>, mask: u32) -> FilterResult<Gray16Image> {
    NaiveMedianFilter::new().filter(image, mask)
}

/// Sliding-histogram median filter with default execution.
pub fn median_filter_sliding(image: &ImageView<'_>, mask: u32) -> FilterResult<Gray16Image> {
    SlidingHistogramMedianFilter::new().filter(image, mask)
}

/// Sort-based median filter with the fixed [`LEGACY_MASK`] window.
#[deprecated(note = "use `median_filter` with an explicit mask")]
pub fn median_filter_31(image: &ImageView<'_>) -> FilterResult<Gray16Image> {
    NaiveMedianFilter::new().filter(image, LEGACY_MASK)
}
