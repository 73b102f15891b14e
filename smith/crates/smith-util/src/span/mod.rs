//! Span module - Source location tracking.
//!
//! Positions are two-dimensional: a zero-based row and a zero-based column
//! counted in characters since the start of the row. A [`Span`] is a
//! half-open pair of positions.
//!
//! # Examples
//!
//! ```
//! use smith_util::span::{Pos, Span};
//!
//! // "foo" at the very start of the input
//! let span = Span::new(Pos::new(0, 0), Pos::new(0, 3));
//! assert_eq!(span.to_string(), "0:0-0:3");
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (row, column) position in source text.
///
/// Both components are zero-based. Ordering is lexicographic: first by row,
/// then by column, which is what the derived `Ord` gives for this field order.
///
/// # Examples
///
/// ```
/// use smith_util::span::Pos;
///
/// assert!(Pos::new(0, 9) < Pos::new(1, 0));
/// assert!(Pos::new(2, 3) < Pos::new(2, 4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Row (line) number, 0-based
    pub row: u32,
    /// Column number, 0-based, in characters
    pub col: u32,
}

impl Pos {
    /// The start of the input.
    pub const ZERO: Pos = Pos { row: 0, col: 0 };

    /// Create a new position
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Move `cols` characters to the right on the same row.
    ///
    /// # Examples
    ///
    /// ```
    /// use smith_util::span::Pos;
    ///
    /// assert_eq!(Pos::new(1, 2).right(3), Pos::new(1, 5));
    /// ```
    #[inline]
    pub const fn right(self, cols: u32) -> Self {
        Self {
            row: self.row,
            col: self.col + cols,
        }
    }

    /// Move down `rows` rows, landing on column 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use smith_util::span::Pos;
    ///
    /// assert_eq!(Pos::new(1, 7).down(2), Pos::new(3, 0));
    /// ```
    #[inline]
    pub const fn down(self, rows: u32) -> Self {
        Self {
            row: self.row + rows,
            col: 0,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Source location span
///
/// A `Span` is the half-open range `[begin, end)`: `begin` is the position of
/// the first character covered and `end` is the position just after the last
/// one. Zero-width spans (`begin == end`) are allowed.
///
/// # Examples
///
/// ```
/// use smith_util::span::{Pos, Span};
///
/// let span = Span::single_line(Pos::new(2, 4), 3);
/// assert_eq!(span.end, Pos::new(2, 7));
/// assert!(!span.is_empty());
///
/// let point = Span::point(Pos::new(2, 0));
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Position of the first character covered
    pub begin: Pos,
    /// Position immediately after the last character covered
    pub end: Pos,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        begin: Pos::ZERO,
        end: Pos::ZERO,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `begin` - Position of the first character
    /// * `end` - Position after the last character; must not precede `begin`
    #[inline]
    pub fn new(begin: Pos, end: Pos) -> Self {
        debug_assert!(begin <= end, "span end {end} precedes begin {begin}");
        Self { begin, end }
    }

    /// Create a zero-width span at a single position
    #[inline]
    pub fn point(pos: Pos) -> Self {
        Self {
            begin: pos,
            end: pos,
        }
    }

    /// Create a span of `width` characters starting at `begin` on one row
    #[inline]
    pub fn single_line(begin: Pos, width: u32) -> Self {
        Self {
            begin,
            end: begin.right(width),
        }
    }

    /// Returns true if this span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns true if the span starts and ends on the same row
    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.begin.row == self.end.row
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}
