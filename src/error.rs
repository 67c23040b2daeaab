//! Error types for plotpipe operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or emitting plot commands.
#[derive(Error, Debug)]
pub enum Error {
    /// Data series columns with unequal lengths.
    #[error("column length mismatch: {}", format_lengths(.lengths))]
    ColumnMismatch {
        /// Observed length of each column, in declaration order.
        lengths: Vec<usize>,
    },

    /// A figure shape requested more columns than its series provides.
    #[error("shape reads {required} column(s), series provides {actual}")]
    DimensionMismatch {
        /// Columns the shape reads.
        required: usize,
        /// Columns the series holds.
        actual: usize,
    },

    /// Axis range where the minimum is not below the maximum.
    #[error("{min} is not lower than {max}")]
    InvalidRange {
        /// Rejected lower bound.
        min: f64,
        /// Rejected upper bound.
        max: f64,
    },

    /// Tick setter called with no values.
    #[error("tick values cannot be empty")]
    EmptyTicks,

    /// Numeric axis selector outside the X/Y/Z range.
    #[error("no axis with index {index} (expected 0..=2)")]
    InvalidAxis {
        /// Rejected selector.
        index: usize,
    },

    /// I/O error while writing to or spawning the engine process.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn format_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mismatch_display() {
        let err = Error::ColumnMismatch {
            lengths: vec![10, 20],
        };
        assert_eq!(err.to_string(), "column length mismatch: 10, 20");
    }

    #[test]
    fn test_invalid_range_display() {
        let err = Error::InvalidRange {
            min: 10.0,
            max: -10.0,
        };
        assert_eq!(err.to_string(), "10 is not lower than -10");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = Error::DimensionMismatch {
            required: 3,
            actual: 2,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_invalid_axis_display() {
        let err = Error::InvalidAxis { index: 7 };
        assert!(err.to_string().contains('7'));
    }
}
