//! Sort-based median filter
//!
//! For every output pixel the full `m x m` clamped neighbourhood is copied
//! into a scratch buffer and sorted. Cost is O(rows * cols * m^2 log m).
//! Kept as the reference the histogram filter is checked against, and for
//! small images.

use crate::median::median_of;
use crate::options::Execution;
use crate::rows::fill_rows;
use crate::traits::MedianFilter;
use crate::{FilterResult, Mask};
use fastmedian_core::{Gray16Image, ImageView};
use log::debug;

/// Reference median filter that sorts each window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMedianFilter {
    execution: Execution,
}

impl NaiveMedianFilter {
    /// Create a filter with default (row-parallel) execution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with the given execution mode.
    pub fn with_execution(execution: Execution) -> Self {
        Self { execution }
    }
}

impl MedianFilter for NaiveMedianFilter {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn filter(&self, image: &ImageView<'_>, mask: u32) -> FilterResult<Gray16Image> {
        let mask = Mask::new(mask)?;
        debug!(
            "naive median: {}x{} image, mask {}, {:?}",
            image.rows(),
            image.cols(),
            mask.size(),
            self.execution
        );
        let window_len = mask.window_len() as usize;
        let out = fill_rows(
            image,
            self.execution,
            || Vec::with_capacity(window_len),
            |window: &mut Vec<u16>, row, out_row| filter_row(image, mask, row, window, out_row),
        )?;
        debug!("naive median: done");
        Ok(out)
    }
}

/// Fill one output row.
fn filter_row(
    image: &ImageView<'_>,
    mask: Mask,
    row: u32,
    window: &mut Vec<u16>,
    out_row: &mut [u16],
) -> FilterResult<()> {
    let r = i64::from(mask.radius());
    let row = i64::from(row);
    for (k, out) in out_row.iter_mut().enumerate() {
        let col = k as i64;
        window.clear();
        for dr in -r..=r {
            for dk in -r..=r {
                window.push(image.sample_at(row + dr, col + dk));
            }
        }
        *out = median_of(window)?;
    }
    Ok(())
}
