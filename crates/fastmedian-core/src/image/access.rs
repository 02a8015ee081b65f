//! Sample access functions
//!
//! Bounds-checked getters and setters for [`Gray16Image`], plus the
//! clamped accessor [`ImageView::sample_at`] used inside filter windows.
//!
//! All index math goes through [`Gray16Image::offset`] /
//! [`ImageView::offset`], which compute `row * cols + col` in `usize`.

use super::{Gray16Image, ImageView, clamp_index};
use crate::error::{Error, Result};

impl Gray16Image {
    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Get the sample at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }

    /// Set the sample at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, row: u32, col: u32, val: u16) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.offset(row, col);
        self.data[idx] = val;
        Ok(())
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u16] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols as usize]
    }

    /// Get one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u16] {
        let start = self.offset(row, 0);
        let cols = self.cols as usize;
        &mut self.data[start..start + cols]
    }
}

impl ImageView<'_> {
    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Get the sample at `(row, col)` without border handling.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }

    /// Get the sample at signed coordinates, clamping to the nearest edge.
    ///
    /// Any `(row, col)` is accepted: coordinates above the last row or
    /// column read the last one, negative coordinates read the first.
    ///
    /// # Example
    ///
    /// ```
    /// use fastmedian_core::ImageView;
    ///
    /// let data = [1u16, 2, 3, 4];
    /// let view = ImageView::new(2, 2, &data).unwrap();
    /// assert_eq!(view.sample_at(-5, -5), 1);
    /// assert_eq!(view.sample_at(0, 7), 2);
    /// assert_eq!(view.sample_at(9, 1), 4);
    /// ```
    #[inline]
    pub fn sample_at(&self, row: i64, col: i64) -> u16 {
        let r = clamp_index(row, self.rows);
        let k = clamp_index(col, self.cols);
        self.data[self.offset(r, k)]
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u16] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols as usize]
    }
}
