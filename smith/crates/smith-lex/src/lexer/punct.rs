//! Delimiter, operator and invalid-character lexing.
//!
//! All three are exactly one character wide. There are no multi-character
//! operators: `==` is two `=` tokens.

use smith_util::span::Span;

use crate::cursor::Cursor;
use crate::token::Token;

use super::core::Scanned;

/// Lexes the delimiter `c` at the cursor.
pub(super) fn lex_delimiter(c: char, cursor: Cursor<'_>) -> Scanned<'_> {
    single(cursor, |span| Token::delimiter(c, span))
}

/// Lexes the operator `c` at the cursor.
pub(super) fn lex_operator(c: char, cursor: Cursor<'_>) -> Scanned<'_> {
    single(cursor, |span| Token::operator(c, span))
}

/// Lexes an unclassified character as [`Token::Invalid`]. Scanning resumes
/// right after it.
pub(super) fn lex_invalid(c: char, cursor: Cursor<'_>) -> Scanned<'_> {
    single(cursor, |span| Token::invalid(c, span))
}

fn single(cursor: Cursor<'_>, make: impl FnOnce(Span) -> Token) -> Scanned<'_> {
    let next = cursor.advance(1);
    let span = Span::new(cursor.pos(), next.pos());
    (make(span), next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smith_util::span::Pos;

    fn one(col: u32) -> Span {
        Span::single_line(Pos::new(0, col), 1)
    }

    #[test]
    fn test_delimiter() {
        let (token, next) = lex_delimiter('(', Cursor::new("(x)"));
        assert_eq!(token, Token::delimiter('(', one(0)));
        assert_eq!(next.rest(), "x)");
    }

    #[test]
    fn test_operators_are_single_characters() {
        let (token, next) = lex_operator('=', Cursor::new("=="));
        assert_eq!(token, Token::operator('=', one(0)));
        assert_eq!(next.rest(), "=");
    }

    #[test]
    fn test_invalid_is_one_column_wide() {
        let (token, next) = lex_invalid('é', Cursor::new("éa"));
        assert_eq!(token, Token::invalid('é', one(0)));
        assert_eq!(next.pos(), Pos::new(0, 1));
        assert_eq!(next.rest(), "a");
    }
}
