//! fastmedian-core - Basic data structures for 16-bit grayscale filtering
//!
//! This crate provides the image containers shared by the filter and
//! I/O crates:
//!
//! - [`Gray16Image`] - Owned row-major grid of 16-bit samples
//! - [`ImageView`] - Borrowed read-only grid with clamp-to-edge access
//! - [`clamp_index`] - The border policy used by every filter
//! - [`SampleDiffResult`] - Summary of a sample-by-sample comparison

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{
    GRAYSCALE_LEVELS, Gray16Image, ImageView, SampleDiffResult, clamp_index,
};
