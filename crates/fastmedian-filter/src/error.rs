//! Error types for fastmedian-filter
//!
//! Every failure is synchronous and detected before or during a single
//! filter call. No partially filtered image is ever returned.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fastmedian_core::Error),

    /// Mask is even, zero, or too large for the histogram counters
    #[error("invalid mask {mask}: {reason}")]
    InvalidMask {
        /// The rejected mask size
        mask: u32,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A median was requested from an empty window
    #[error("median of an empty window")]
    EmptyWindow,

    /// Internal bookkeeping went wrong (e.g. removing an absent sample)
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Coarse classification of a [`FilterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`FilterError::Core`]
    Core,
    /// See [`FilterError::InvalidMask`]
    InvalidMask,
    /// See [`FilterError::EmptyWindow`]
    EmptyWindow,
    /// See [`FilterError::InvariantViolation`]
    InvariantViolation,
}

impl FilterError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::Core(_) => ErrorKind::Core,
            FilterError::InvalidMask { .. } => ErrorKind::InvalidMask,
            FilterError::EmptyWindow => ErrorKind::EmptyWindow,
            FilterError::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = FilterError::InvalidMask {
            mask: 4,
            reason: "mask must be odd",
        };
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
        assert_eq!(err.to_string(), "invalid mask 4: mask must be odd");
        assert_eq!(FilterError::EmptyWindow.kind(), ErrorKind::EmptyWindow);
        assert_eq!(
            FilterError::InvariantViolation("x".into()).kind(),
            ErrorKind::InvariantViolation
        );
        let core: FilterError =
            fastmedian_core::Error::InvalidDimension { rows: 0, cols: 1 }.into();
        assert_eq!(core.kind(), ErrorKind::Core);
    }
}
