//! Filter configuration
//!
//! [`MedianFilterOptions`] selects the algorithm and how rows are
//! scheduled. Both choices only affect speed: every combination produces
//! the same output for the same input and mask.

/// Median algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MedianMethod {
    /// Gather and sort every window. Reference implementation.
    Naive,
    /// Incremental histogram, rebuilt per row and slid along columns.
    #[default]
    SlidingHistogram,
}

/// Row scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Execution {
    /// All rows on the calling thread
    Serial,
    /// Rows spread over the rayon thread pool, one private window per worker
    #[default]
    RowParallel,
}

/// Options for [`median_filter`](crate::median_filter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedianFilterOptions {
    /// Algorithm to use
    pub method: MedianMethod,
    /// Row scheduling
    pub execution: Execution,
}

impl MedianFilterOptions {
    /// Create options with a specific method
    pub fn with_method(method: MedianMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Create options with a specific execution mode
    pub fn with_execution(execution: Execution) -> Self {
        Self {
            execution,
            ..Default::default()
        }
    }

    /// Replace the execution mode
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MedianFilterOptions::default();
        assert_eq!(opts.method, MedianMethod::SlidingHistogram);
        assert_eq!(opts.execution, Execution::RowParallel);
    }

    #[test]
    fn test_builders() {
        let opts =
            MedianFilterOptions::with_method(MedianMethod::Naive).execution(Execution::Serial);
        assert_eq!(opts.method, MedianMethod::Naive);
        assert_eq!(opts.execution, Execution::Serial);

        let opts = MedianFilterOptions::with_execution(Execution::Serial);
        assert_eq!(opts.method, MedianMethod::SlidingHistogram);
    }
}
