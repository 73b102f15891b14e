//! Core error types for smith-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

use crate::span::Pos;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Span whose end precedes its begin
    #[error("Invalid span: begin {begin} is after end {end}")]
    InvalidSpan {
        /// Start of the span
        begin: Pos,
        /// End of the span, before `begin`
        end: Pos,
    },

    /// Row past the last line of the file
    #[error("Row out of bounds: row {row} (file has {rows} lines)")]
    RowOutOfBounds {
        /// Requested row
        row: u32,
        /// Number of lines in the file
        rows: usize,
    },

    /// Column past the end of its line
    #[error("Column out of bounds: {row}:{col} (line has {width} characters)")]
    ColumnOutOfBounds {
        /// Row of the position
        row: u32,
        /// Requested column
        col: u32,
        /// Characters on that row
        width: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceMapError::ColumnOutOfBounds {
            row: 2,
            col: 9,
            width: 4,
        };
        assert_eq!(
            err.to_string(),
            "Column out of bounds: 2:9 (line has 4 characters)"
        );

        let err = SourceMapError::InvalidSpan {
            begin: Pos::new(0, 4),
            end: Pos::new(0, 1),
        };
        assert_eq!(err.to_string(), "Invalid span: begin 0:4 is after end 0:1");
    }
}
