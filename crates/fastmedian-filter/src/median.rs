//! Median extraction from a flat sample buffer
//!
//! Sorts in place and picks index `(len - 1) / 2`, which is the same order
//! statistic [`Histogram::median`](crate::Histogram::median) returns for
//! both odd and even counts.

use crate::{FilterError, FilterResult};

/// Median of `values`, sorting them in place.
///
/// # Errors
///
/// Returns [`FilterError::EmptyWindow`] if `values` is empty.
pub fn median_of(values: &mut [u16]) -> FilterResult<u16> {
    if values.is_empty() {
        return Err(FilterError::EmptyWindow);
    }
    values.sort_unstable();
    Ok(values[(values.len() - 1) / 2])
}
