//! Gray16 image containers
//!
//! [`Gray16Image`] owns a flat row-major buffer of 16-bit samples.
//! [`ImageView`] borrows such a buffer read-only and is what the filters
//! consume.
//!
//! # Sample layout
//!
//! - One `u16` per sample, no padding between rows
//! - Sample `(r, k)` lives at index `r * cols + k`
//! - Row `r` is the slice `[r * cols, (r + 1) * cols)`
//!
//! # Ownership model
//!
//! A view never outlives the buffer it was built from, and nothing can
//! be written through it. Filters read from a view and return a fresh
//! owned image of the same dimensions.

mod access;
mod border;
mod compare;

pub use border::clamp_index;
pub use compare::SampleDiffResult;

use crate::error::{Error, Result};

/// Number of distinct 16-bit gray levels.
pub const GRAYSCALE_LEVELS: usize = 1 << 16;

/// Check `rows`/`cols` and return the required buffer length.
fn checked_len(rows: u32, cols: u32) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimension { rows, cols });
    }
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or(Error::InvalidDimension { rows, cols })
}

/// Validate that `len` matches `rows * cols`.
fn check_buffer(rows: u32, cols: u32, len: usize) -> Result<()> {
    let expected = checked_len(rows, cols)?;
    if expected != len {
        return Err(Error::DimensionMismatch {
            rows,
            cols,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Owned 16-bit grayscale image.
///
/// # Examples
///
/// ```
/// use fastmedian_core::Gray16Image;
///
/// let img = Gray16Image::new(480, 640).unwrap();
/// assert_eq!(img.rows(), 480);
/// assert_eq!(img.cols(), 640);
/// assert!(img.data().iter().all(|&v| v == 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gray16Image {
    rows: u32,
    cols: u32,
    data: Vec<u16>,
}

impl Gray16Image {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` or `cols` is 0.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<u16>) -> Result<Self> {
        check_buffer(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    /// Build an image by evaluating `f(row, col)` for every sample.
    pub fn from_fn<F>(rows: u32, cols: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u16,
    {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for r in 0..rows {
            for k in 0..cols {
                data.push(f(r, k));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a constructed image has at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// Mutable raw row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    /// Consume the image and return its buffer.
    pub fn into_vec(self) -> Vec<u16> {
        self.data
    }

    /// Borrow the image as a read-only view.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }

    /// Check if two images have the same dimensions.
    pub fn sizes_equal(&self, other: &Gray16Image) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

/// Read-only view over a caller-owned row-major sample buffer.
///
/// Out-of-range access through [`ImageView::sample_at`] is resolved with
/// the clamp-to-edge border policy, so every integer coordinate is valid.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    rows: u32,
    cols: u32,
    data: &'a [u16],
}

impl<'a> ImageView<'a> {
    /// Create a view over `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn new(rows: u32, cols: u32, data: &'a [u16]) -> Result<Self> {
        check_buffer(rows, cols, data.len())?;
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed view.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [u16] {
        self.data
    }

    /// Copy the viewed samples into an owned image.
    pub fn to_owned_image(&self) -> Gray16Image {
        Gray16Image {
            rows: self.rows,
            cols: self.cols,
            data: self.data.to_vec(),
        }
    }
}
