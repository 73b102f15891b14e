//! smith-lex - Lexical Analyzer for the Smith Language
//!
//! This crate turns Smith source text into an ordered sequence of
//! position-tagged tokens. Tokenizing is a pure, total function: it never
//! fails, and the same input always yields the same tokens and spans.
//!
//! # Example Usage
//!
//! ```
//! use smith_lex::{tokenize, Lexer, Token, TokenKind};
//!
//! let tokens = tokenize("foo(x, y, z)");
//! assert_eq!(tokens.len(), 8);
//! assert_eq!(tokens[0].kind(), TokenKind::Symbol);
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new("3.14");
//! assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Float));
//! assert_eq!(lexer.next(), None);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Driving loop and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classes
//!
//! # Token Categories
//!
//! - **Symbol**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Int**: `42`, `007`
//! - **Float**: `3.14`, `.24`
//! - **Delimiter**: `(`, `)`, `[`, `]`, `{`, `}`, `,`, `:`
//! - **Operator**: `+`, `-`, `*`, `/`, `=`, `.`
//! - **Indent**: leading spaces of each line after a newline run
//! - **Invalid**: any other character, one per token
//!
//! The `.` after a number is an operator unless digits follow it, so
//! `3.max(10)` is `3` `.` `max` `(` `10` `)`.
//!
//! Horizontal whitespace between tokens is skipped; all other input is
//! covered by exactly one token span.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
mod diagnose;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::CharClass;
pub use cursor::Cursor;
pub use diagnose::diagnose;
pub use lexer::{tokenize, Lexer};
pub use token::{IndentUnit, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smith_util::span::{Pos, SourceFile, Span};

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .iter()
            .map(|t| format!("{} {}", t.kind(), t.text()))
            .collect()
    }

    #[test]
    fn test_numeric_disambiguation() {
        assert_eq!(texts("3.14"), vec!["float 3.14"]);
        assert_eq!(texts(".24"), vec!["float .24"]);
        assert_eq!(texts("."), vec!["operator ."]);
        assert_eq!(
            texts("3.max(10)"),
            vec![
                "int 3",
                "operator .",
                "symbol max",
                "delimiter (",
                "int 10",
                "delimiter )"
            ]
        );
    }

    #[test]
    fn test_small_program() {
        let source = "area = fn(w, h):\n  w * h\n\nprint(area(3, 4.5))\n";
        let tokens = tokenize(source);
        let file = SourceFile::new("area.smith", source);

        for token in &tokens {
            let slice = file.slice(token.span()).unwrap();
            assert_eq!(slice, token.text(), "{token}");
        }
        assert_eq!(tokens.iter().filter(|t| t.kind() == TokenKind::Indent).count(), 3);
        assert!(!tokens.iter().any(Token::is_invalid));
    }

    #[test]
    fn test_last_token_of_multiline_source() {
        let tokens = tokenize("a\n\n\n  b");
        assert_eq!(
            tokens,
            vec![
                Token::symbol("a", Span::single_line(Pos::ZERO, 1)),
                Token::indent(2, Span::single_line(Pos::new(3, 0), 2)),
                Token::symbol("b", Span::single_line(Pos::new(3, 2), 1)),
            ]
        );
    }

    #[test]
    fn test_json_token_list() {
        let tokens = tokenize("f(x)");
        let json = serde_json::to_string(&tokens).unwrap();
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
        assert!(json.starts_with(r#"[{"kind":"symbol","value":"f""#));
    }
}
