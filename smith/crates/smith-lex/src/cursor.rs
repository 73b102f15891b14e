//! Character cursor for traversing source code.
//!
//! A [`Cursor`] is the unconsumed suffix of the input together with the
//! [`Pos`] of its first character. It is `Copy` and every operation takes it
//! by value and hands back a new cursor, so a sub-scanner can look ahead or
//! back off simply by keeping the cursor it was given.

use smith_util::span::{Pos, Span};

use crate::classify::{is_newline, is_space};

/// A cursor over the remaining source text.
///
/// # Example
///
/// ```
/// use smith_lex::cursor::Cursor;
/// use smith_util::span::Pos;
///
/// let cursor = Cursor::new("foo(x)");
/// let (text, span, rest) = cursor.take_while(|c| c.is_ascii_alphabetic());
/// assert_eq!(text, "foo");
/// assert_eq!(span.end, Pos::new(0, 3));
/// assert_eq!(rest.first(), Some('('));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The source text not yet consumed.
    rest: &'a str,

    /// Position of the first character of `rest`.
    pos: Pos,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at row 0, column 0 of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            pos: Pos::ZERO,
        }
    }

    /// The unconsumed text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Position of the next character.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns true if no input remains.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// The next character, or `None` at end of input.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consumes `count` characters from the current line.
    ///
    /// The column grows by the number of characters actually consumed (fewer
    /// than `count` only at end of input) and the row is unchanged. Must not
    /// be used to step over a newline; see [`Cursor::skip_newlines`].
    ///
    /// ```
    /// use smith_lex::cursor::Cursor;
    /// use smith_util::span::Pos;
    ///
    /// let cursor = Cursor::new("abc").advance(2);
    /// assert_eq!(cursor.rest(), "c");
    /// assert_eq!(cursor.pos(), Pos::new(0, 2));
    /// ```
    pub fn advance(self, count: usize) -> Self {
        let len = self
            .rest
            .char_indices()
            .nth(count)
            .map_or(self.rest.len(), |(i, _)| i);
        let (taken, rest) = self.rest.split_at(len);
        debug_assert!(
            !taken.contains('\n'),
            "advance crossed a line boundary at {}",
            self.pos
        );
        Self {
            rest,
            pos: self.pos.right(taken.chars().count() as u32),
        }
    }

    /// Consumes the longest prefix whose characters all satisfy `predicate`.
    ///
    /// Returns the consumed text, its span and the advanced cursor. When the
    /// first character fails the predicate (or the input is exhausted) the
    /// text is empty and the span has zero width.
    ///
    /// The predicate may carry state; it is called once per character, in
    /// order, until it first returns `false`. Only horizontal predicates
    /// belong here: a predicate accepting `'\n'` would corrupt the column.
    pub fn take_while(self, mut predicate: impl FnMut(char) -> bool) -> (&'a str, Span, Self) {
        let mut len = 0;
        let mut width = 0;
        for c in self.rest.chars() {
            if !predicate(c) {
                break;
            }
            len += c.len_utf8();
            width += 1;
        }
        let (text, rest) = self.rest.split_at(len);
        debug_assert!(!text.contains('\n'), "take_while consumed a newline");
        let next = Self {
            rest,
            pos: self.pos.right(width),
        };
        (text, Span::new(self.pos, next.pos), next)
    }

    /// Consumes a run of newline characters.
    ///
    /// Returns how many were consumed; the row advances by that many and the
    /// column resets to 0. With no newline ahead the cursor is unchanged.
    ///
    /// ```
    /// use smith_lex::cursor::Cursor;
    /// use smith_util::span::Pos;
    ///
    /// let (count, cursor) = Cursor::new("\n\n\n  x").skip_newlines();
    /// assert_eq!(count, 3);
    /// assert_eq!(cursor.pos(), Pos::new(3, 0));
    /// ```
    pub fn skip_newlines(self) -> (u32, Self) {
        let len = self
            .rest
            .find(|c: char| !is_newline(c))
            .unwrap_or(self.rest.len());
        if len == 0 {
            return (0, self);
        }
        // newline characters are single bytes
        let count = len as u32;
        let next = Self {
            rest: &self.rest[len..],
            pos: self.pos.down(count),
        };
        (count, next)
    }

    /// Skips horizontal whitespace.
    pub fn trim(self) -> Self {
        let (_, _, next) = self.take_while(is_space);
        next
    }
}
