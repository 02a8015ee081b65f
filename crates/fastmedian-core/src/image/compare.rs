//! Image comparison operations
//!
//! Sample-by-sample comparison of two [`Gray16Image`]s: equality, the
//! number of differing samples, the largest absolute difference and the
//! first mismatch position. Used to cross-check filter implementations
//! and by the regression harness.

use super::Gray16Image;
use crate::error::{Error, Result};

/// Result of comparing two images sample by sample
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDiffResult {
    /// Number of samples that differ
    pub n_diff: u64,
    /// Fraction of samples that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Maximum absolute sample difference
    pub max_diff: u16,
    /// `(row, col)` of the first differing sample in row-major order
    pub first_mismatch: Option<(u32, u32)>,
}

impl SampleDiffResult {
    /// True if no sample differs.
    pub fn is_identical(&self) -> bool {
        self.n_diff == 0
    }
}

impl Gray16Image {
    /// Count the samples that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    pub fn count_sample_diffs(&self, other: &Gray16Image) -> Result<SampleDiffResult> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols(),
            ));
        }

        let cols = self.cols() as usize;
        let mut n_diff = 0u64;
        let mut max_diff = 0u16;
        let mut first_mismatch = None;

        for (i, (&a, &b)) in self.data().iter().zip(other.data()).enumerate() {
            if a != b {
                n_diff += 1;
                max_diff = max_diff.max(a.abs_diff(b));
                if first_mismatch.is_none() {
                    first_mismatch = Some(((i / cols) as u32, (i % cols) as u32));
                }
            }
        }

        Ok(SampleDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / self.len() as f64,
            max_diff,
            first_mismatch,
        })
    }

    /// Check if two images have identical dimensions and samples.
    pub fn equals(&self, other: &Gray16Image) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }
}
