//! Row scheduling shared by both filters
//!
//! Output rows are disjoint slices of the result buffer. Each worker gets
//! its own scratch state from `init` and fills whole rows with `fill_row`.

use crate::options::Execution;
use crate::FilterResult;
use fastmedian_core::{Gray16Image, ImageView};
use rayon::prelude::*;

/// Allocate an output image and fill every row.
///
/// `fill_row(state, row, out_row)` must write all `cols` samples of
/// `out_row`. The first error stops the run and is returned; the partially
/// written buffer is dropped.
pub(crate) fn fill_rows<S, I, F>(
    image: &ImageView<'_>,
    execution: Execution,
    init: I,
    fill_row: F,
) -> FilterResult<Gray16Image>
where
    I: Fn() -> S + Sync + Send,
    F: Fn(&mut S, u32, &mut [u16]) -> FilterResult<()> + Sync + Send,
{
    let mut out = Gray16Image::new(image.rows(), image.cols())?;
    let cols = image.cols() as usize;

    match execution {
        Execution::Serial => {
            let mut state = init();
            for (r, out_row) in out.data_mut().chunks_mut(cols).enumerate() {
                fill_row(&mut state, r as u32, out_row)?;
            }
        }
        Execution::RowParallel => {
            out.data_mut()
                .par_chunks_mut(cols)
                .enumerate()
                .try_for_each_init(init, |state, (r, out_row)| {
                    fill_row(state, r as u32, out_row)
                })?;
        }
    }

    Ok(out)
}
