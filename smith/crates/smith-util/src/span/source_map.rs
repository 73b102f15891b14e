//! Source files and position-to-offset mapping.
//!
//! Tokens only carry (row, column) positions. [`SourceFile`] keeps the text
//! together with the byte offset of every line start so that a [`Span`] can
//! be mapped back to the exact substring it covers.

use std::sync::Arc;

use super::{Pos, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use smith_util::span::SourceFile;
///
/// let file = SourceFile::new("main.smith", "foo(x)\nbar");
/// assert_eq!(file.name(), "main.smith");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line(1), Some("bar"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path, used for display only
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (0-indexed) without its terminating newline
    ///
    /// Returns `None` if the row is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use smith_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("t", "[\n  1\n]");
    /// assert_eq!(file.line(1), Some("  1"));
    /// assert_eq!(file.line(3), None);
    /// ```
    pub fn line(&self, row: usize) -> Option<&str> {
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .map_or(self.content.len(), |next| next - 1);
        self.content.get(start..end)
    }

    /// Convert a position to a byte offset into the content
    ///
    /// The column may point one past the last character of its line, which is
    /// where half-open spans end.
    ///
    /// # Errors
    ///
    /// `RowOutOfBounds` or `ColumnOutOfBounds` when the position does not
    /// exist in this file.
    pub fn offset(&self, pos: Pos) -> SourceMapResult<usize> {
        let row = pos.row as usize;
        let line = self.line(row).ok_or(SourceMapError::RowOutOfBounds {
            row: pos.row,
            rows: self.line_count(),
        })?;
        let within = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(line.len()))
            .nth(pos.col as usize)
            .ok_or(SourceMapError::ColumnOutOfBounds {
                row: pos.row,
                col: pos.col,
                width: line.chars().count(),
            })?;
        Ok(self.line_starts[row] + within)
    }

    /// Get the exact source text covered by a span
    ///
    /// # Examples
    ///
    /// ```
    /// use smith_util::span::{Pos, SourceFile, Span};
    ///
    /// let file = SourceFile::new("t", "foo(x, y)");
    /// let span = Span::new(Pos::new(0, 4), Pos::new(0, 5));
    /// assert_eq!(file.slice(span).unwrap(), "x");
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidSpan` when `end` precedes `begin`; the offset errors of
    /// [`SourceFile::offset`] otherwise.
    pub fn slice(&self, span: Span) -> SourceMapResult<&str> {
        if span.end < span.begin {
            return Err(SourceMapError::InvalidSpan {
                begin: span.begin,
                end: span.end,
            });
        }
        let start = self.offset(span.begin)?;
        let end = self.offset(span.end)?;
        Ok(&self.content[start..end])
    }
}
