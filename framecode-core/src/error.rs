//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Arithmetic or comparison between timecodes bound to different formats.
    #[error("frame rate format mismatch: {left} vs {right}")]
    FormatMismatch {
        /// Canonical label of the left operand's format.
        left: String,
        /// Canonical label of the right operand's format.
        right: String,
    },

    /// A field value violates its legal bound.
    #[error("{field} out of range: {value} (legal {min}..={max})")]
    OutOfRangeField {
        /// Name of the offending field (hours, minutes, seconds, frames).
        field: String,
        /// The value that was provided.
        value: i64,
        /// Lowest legal value at this position.
        min: i64,
        /// Highest legal value at this position.
        max: i64,
    },

    /// Malformed textual timecode input.
    #[error("malformed timecode at field {index}: {text:?}")]
    Parse {
        /// Zero-based index of the offending field.
        index: usize,
        /// The raw text that failed to parse.
        text: String,
    },

    /// An operation that needs a real frame domain was attempted against the
    /// `None` format sentinel.
    #[error("unknown frame rate format for {operation}")]
    UnknownFormat {
        /// The operation that was attempted.
        operation: String,
    },

    /// A total-frame-count computation exceeded the i64 range.
    #[error("frame count overflow")]
    Overflow,
}

impl TimecodeError {
    /// Create a format mismatch error from the two operand formats.
    pub fn format_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::FormatMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an out-of-range field error.
    pub fn out_of_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRangeField {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a parse error for the given field index and raw text.
    pub fn parse(index: usize, text: impl Into<String>) -> Self {
        Self::Parse {
            index,
            text: text.into(),
        }
    }

    /// Create an unknown-format error for the given operation.
    pub fn unknown_format(operation: impl Into<String>) -> Self {
        Self::UnknownFormat {
            operation: operation.into(),
        }
    }
}
