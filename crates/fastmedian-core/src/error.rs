//! Error types for fastmedian-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// fastmedian core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (a zero row or column count)
    #[error("invalid image dimensions: {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },

    /// Sample buffer length does not match `rows * cols`
    #[error("dimension mismatch: {rows}x{cols} requires {expected} samples, got {actual}")]
    DimensionMismatch {
        rows: u32,
        cols: u32,
        expected: usize,
        actual: usize,
    },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Index out of bounds
    #[error("index out of bounds: ({row}, {col}) in {rows}x{cols} image")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
