//! Error types for the regression harness

use fastmedian_io::IoError;
use thiserror::Error;

/// Errors raised by [`RegParams`](crate::RegParams) and the test-data
/// helpers
#[derive(Debug, Error)]
pub enum TestError {
    /// A test-data TIFF could not be decoded
    #[error("cannot read test image '{path}'")]
    ImageLoad {
        path: String,
        #[source]
        source: IoError,
    },

    /// A regression output TIFF could not be written
    #[error("cannot write regression output '{path}'")]
    ImageWrite {
        path: String,
        #[source]
        source: IoError,
    },

    /// Two images of equal size hold different samples
    #[error(
        "check {index}: {n_diff} samples differ, largest difference {max_diff}, \
         first at {}",
        format_position(.first_mismatch)
    )]
    ImageMismatch {
        index: usize,
        n_diff: u64,
        max_diff: u16,
        /// `(row, col)` of the first differing sample in row-major order
        first_mismatch: Option<(u32, u32)>,
    },

    /// No golden file exists for a check run in compare mode
    #[error("check {index}: golden file not found: {path}")]
    GoldenNotFound { index: usize, path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_position(pos: &Option<(u32, u32)>) -> String {
    match pos {
        Some((row, col)) => format!("row {} col {}", row, col),
        None => "none".to_string(),
    }
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
