//! Number literal lexing.
//!
//! This module handles integer and floating-point literals, and decides what
//! a `.` next to digits means.

use smith_util::span::Span;

use crate::classify::is_digit;
use crate::cursor::Cursor;
use crate::token::Token;

use super::core::Scanned;

/// Lexes a number literal, or a lone `.` operator.
///
/// Entered on a digit or a `.`. Consumes digits and at most one `.`, then:
///
/// - a run of just `.` is the operator `.`
/// - a run ending in `.` gives the `.` back and is an integer (`3.max`)
/// - a run with a `.` is a float (`3.14`, `.24`)
/// - anything else is an integer
///
/// A second `.` always ends the run, so `3.14.min` lexes as `3.14` followed
/// by the operator.
pub(super) fn lex_number(cursor: Cursor<'_>) -> Scanned<'_> {
    let mut seen_dot = false;
    let (text, span, next) = cursor.take_while(|c| match c {
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        c => is_digit(c),
    });

    if text == "." {
        return (Token::operator('.', span), next);
    }

    if let Some(digits) = text.strip_suffix('.') {
        // digits are ASCII, so the byte length is the column width
        let next = cursor.advance(digits.len());
        return (Token::int(digits, Span::new(cursor.pos(), next.pos())), next);
    }

    if seen_dot {
        (Token::float(text, span), next)
    } else {
        (Token::int(text, span), next)
    }
}
