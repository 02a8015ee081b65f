//! Windowed gray-level histogram
//!
//! Counts how many samples of each 16-bit value are currently inside a
//! filter window. Samples enter with [`Histogram::insert`] and leave with
//! [`Histogram::remove`]; [`Histogram::median`] answers the middle order
//! statistic with a cumulative scan from value 0.
//!
//! Each histogram owns its 65536 buckets on the heap. Workers filtering
//! different rows each hold their own instance.

use crate::{FilterError, FilterResult};
use fastmedian_core::GRAYSCALE_LEVELS;

/// Occurrence counts over the full 16-bit range.
///
/// Invariant: the sum of all buckets equals [`Histogram::total`].
#[derive(Clone)]
pub struct Histogram {
    buckets: Box<[u32]>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram with [`GRAYSCALE_LEVELS`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![0u32; GRAYSCALE_LEVELS].into_boxed_slice(),
            total: 0,
        }
    }

    /// Add one occurrence of `value`.
    #[inline]
    pub fn insert(&mut self, value: u16) {
        self.buckets[usize::from(value)] += 1;
        self.total += 1;
    }

    /// Remove one occurrence of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvariantViolation`] if `value` has a zero
    /// count. The histogram is left unchanged in that case.
    #[inline]
    pub fn remove(&mut self, value: u16) -> FilterResult<()> {
        let bucket = &mut self.buckets[usize::from(value)];
        if *bucket == 0 {
            return Err(FilterError::InvariantViolation(format!(
                "removing value {value} that is not in the window"
            )));
        }
        *bucket -= 1;
        self.total -= 1;
        Ok(())
    }

    /// Median of the represented samples.
    ///
    /// Returns the smallest value `v` whose cumulative count over `0..=v`
    /// reaches `ceil(total / 2)`. For an odd total this is the middle
    /// element; for an even total it is the lower of the two middle ones.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyWindow`] if the histogram is empty.
    pub fn median(&self) -> FilterResult<u16> {
        if self.total == 0 {
            return Err(FilterError::EmptyWindow);
        }
        let threshold = self.total.div_ceil(2);
        let mut cumulative = 0u64;
        for (value, &count) in self.buckets.iter().enumerate() {
            cumulative += u64::from(count);
            if cumulative >= threshold {
                return Ok(value as u16);
            }
        }
        Err(FilterError::InvariantViolation(format!(
            "bucket sum {cumulative} is below the cached total {}",
            self.total
        )))
    }

    /// Number of samples currently represented.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for a single value.
    #[inline]
    pub fn count(&self, value: u16) -> u32 {
        self.buckets[usize::from(value)]
    }

    /// True if no samples are represented.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.buckets.fill(0);
        self.total = 0;
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let occupied = self.buckets.iter().filter(|&&c| c > 0).count();
        f.debug_struct("Histogram")
            .field("total", &self.total)
            .field("occupied_buckets", &occupied)
            .finish()
    }
}
