//! Symbol lexing.

use crate::classify::is_symbol_tail;
use crate::cursor::Cursor;
use crate::token::Token;

use super::core::Scanned;

/// Lexes a symbol.
///
/// Symbols start with a letter or underscore, followed by letters, digits or
/// underscores. There are no keywords; every name is a symbol.
pub(super) fn lex_symbol(cursor: Cursor<'_>) -> Scanned<'_> {
    let (text, span, next) = cursor.take_while(is_symbol_tail);
    (Token::symbol(text, span), next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smith_util::span::{Pos, Span};

    fn lex_sym(source: &str) -> (Token, &str) {
        let (token, next) = lex_symbol(Cursor::new(source));
        (token, next.rest())
    }

    #[test]
    fn test_simple_symbol() {
        assert_eq!(
            lex_sym("foo(x)"),
            (Token::symbol("foo", Span::single_line(Pos::ZERO, 3)), "(x)")
        );
    }

    #[test]
    fn test_mixed_case_with_digits_and_underscores() {
        let (token, rest) = lex_sym("_Max_2.x");
        assert_eq!(token, Token::symbol("_Max_2", Span::single_line(Pos::ZERO, 6)));
        assert_eq!(rest, ".x");
    }

    #[test]
    fn test_stops_at_non_ascii() {
        let (token, rest) = lex_sym("abé");
        assert_eq!(token.text(), "ab");
        assert_eq!(rest, "é");
    }
}
