//! fastmedian - Median filtering of 16-bit grayscale images
//!
//! Square-window median filters over row-major `u16` images, with the
//! clamp-to-edge border rule. The histogram-based filter updates one
//! column per step instead of sorting every window, and agrees exactly
//! with the sort-based reference.
//!
//! # Example
//!
//! ```
//! use fastmedian::Gray16Image;
//! use fastmedian::filter::{MedianFilterOptions, median_filter};
//!
//! let img = Gray16Image::from_fn(32, 48, |r, k| ((r * 48 + k) % 7) as u16).unwrap();
//! let out = median_filter(&img.view(), 5, &MedianFilterOptions::default()).unwrap();
//! assert_eq!(out.dimensions(), (32, 48));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fastmedian_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fastmedian_filter as filter;
pub use fastmedian_io as io;
