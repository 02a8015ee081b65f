//! Sliding-histogram median filter
//!
//! Huang-style incremental filtering with a per-row reset. For output row
//! `r` the filter runs a small state machine:
//!
//! 1. **Row start**: clear the histogram and insert the `m x m` clamped
//!    neighbourhood of column 0, then emit its median.
//! 2. **Sliding**: for each following column `k`, remove the `m` samples
//!    of the column that left the window (`k - 1 - radius`), insert the
//!    `m` samples of the column that entered (`k + radius`), emit the
//!    median. Removals always come first.
//! 3. **Row end**: the histogram is discarded; the next row starts over.
//!
//! No state is carried between rows, so rows can be filled in any order
//! and on any thread. Cost is O(rows * cols * m) sample updates plus the
//! median scans.
//!
//! Column indices are clamped with the same rule as the reference filter,
//! so the histogram always holds exactly the multiset the sort-based
//! filter would gather, and the outputs are identical.

use crate::histogram::Histogram;
use crate::options::Execution;
use crate::rows::fill_rows;
use crate::traits::MedianFilter;
use crate::{FilterError, FilterResult, Mask};
use fastmedian_core::{Gray16Image, ImageView};
use log::debug;

/// Median filter that maintains a gray-level histogram per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingHistogramMedianFilter {
    execution: Execution,
}

impl SlidingHistogramMedianFilter {
    /// Create a filter with default (row-parallel) execution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with the given execution mode.
    pub fn with_execution(execution: Execution) -> Self {
        Self { execution }
    }
}

impl MedianFilter for SlidingHistogramMedianFilter {
    fn name(&self) -> &'static str {
        "sliding-histogram"
    }

    fn filter(&self, image: &ImageView<'_>, mask: u32) -> FilterResult<Gray16Image> {
        let mask = Mask::new(mask)?;
        debug!(
            "sliding median: {}x{} image, mask {}, {:?}",
            image.rows(),
            image.cols(),
            mask.size(),
            self.execution
        );
        let out = fill_rows(
            image,
            self.execution,
            Histogram::new,
            |hist: &mut Histogram, row, out_row| {
                filter_row(image, mask, row, hist, out_row, &mut |_: &Histogram| {})
            },
        )?;
        debug!("sliding median: done");
        Ok(out)
    }
}

/// Fill one output row, calling `observe` after the row-start build and
/// after every slide step.
fn filter_row<O>(
    image: &ImageView<'_>,
    mask: Mask,
    row: u32,
    hist: &mut Histogram,
    out_row: &mut [u16],
    observe: &mut O,
) -> FilterResult<()>
where
    O: FnMut(&Histogram),
{
    let radius = i64::from(mask.radius());
    let window_len = u64::from(mask.window_len());
    let row = i64::from(row);

    // Row start
    hist.clear();
    for dk in -radius..=radius {
        insert_column(image, hist, row, radius, dk);
    }
    check_total(hist, window_len)?;
    observe(hist);

    let Some((first, rest)) = out_row.split_first_mut() else {
        return Ok(());
    };
    *first = hist.median()?;

    // Sliding
    for (i, out) in rest.iter_mut().enumerate() {
        let col = i as i64 + 1;
        remove_column(image, hist, row, radius, col - 1 - radius)?;
        insert_column(image, hist, row, radius, col + radius);
        check_total(hist, window_len)?;
        observe(hist);
        *out = hist.median()?;
    }

    Ok(())
}

/// Insert the `m` clamped samples of column `col` around `row`.
#[inline]
fn insert_column(image: &ImageView<'_>, hist: &mut Histogram, row: i64, radius: i64, col: i64) {
    for dr in -radius..=radius {
        hist.insert(image.sample_at(row + dr, col));
    }
}

/// Remove the `m` clamped samples of column `col` around `row`.
#[inline]
fn remove_column(
    image: &ImageView<'_>,
    hist: &mut Histogram,
    row: i64,
    radius: i64,
    col: i64,
) -> FilterResult<()> {
    for dr in -radius..=radius {
        hist.remove(image.sample_at(row + dr, col))?;
    }
    Ok(())
}

/// The window must hold exactly `m * m` samples between steps.
#[inline]
fn check_total(hist: &Histogram, window_len: u64) -> FilterResult<()> {
    if hist.total() != window_len {
        return Err(FilterError::InvariantViolation(format!(
            "window holds {} samples, expected {window_len}",
            hist.total()
        )));
    }
    Ok(())
}
