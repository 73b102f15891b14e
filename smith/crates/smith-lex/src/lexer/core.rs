//! Core lexer implementation.
//!
//! This module contains the driving loop: skip horizontal whitespace, stop at
//! end of input, otherwise classify the next character and hand the cursor to
//! the matching sub-scanner.

use crate::classify::CharClass;
use crate::cursor::Cursor;
use crate::token::Token;

use super::newline::lex_newline;
use super::number::lex_number;
use super::punct::{lex_delimiter, lex_invalid, lex_operator};
use super::symbol::lex_symbol;

/// A token together with the cursor positioned just after it.
pub(super) type Scanned<'a> = (Token, Cursor<'a>);

/// Tokenizes `source` completely.
///
/// Never fails: characters outside every class become [`Token::Invalid`] and
/// scanning carries on. Horizontal whitespace between tokens is dropped;
/// everything else is covered by exactly one token span.
///
/// # Example
///
/// ```
/// use smith_lex::{tokenize, Token};
/// use smith_util::span::{Pos, Span};
///
/// let tokens = tokenize("3.max(10)");
/// assert_eq!(tokens[0], Token::int("3", Span::new(Pos::new(0, 0), Pos::new(0, 1))));
/// assert_eq!(tokens[1], Token::operator('.', Span::new(Pos::new(0, 1), Pos::new(0, 2))));
/// assert_eq!(tokens.len(), 6);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Done,
}

/// Lexer for the Smith language.
///
/// An iterator over the tokens of one source string. It owns its cursor
/// exclusively and keeps no other state, so two lexers over the same input
/// always produce the same tokens.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    state: State,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Running,
        }
    }

    /// The cursor the next token will be scanned from.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.state == State::Done {
            return None;
        }
        self.cursor = self.cursor.trim();
        match scan_token(self.cursor) {
            Some((token, next)) => {
                self.cursor = next;
                Some(token)
            }
            None => {
                self.state = State::Done;
                None
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Dispatches on the class of the next character.
fn scan_token(cursor: Cursor<'_>) -> Option<Scanned<'_>> {
    let c = cursor.first()?;
    let scanned = match CharClass::of(c) {
        CharClass::SymbolHead => lex_symbol(cursor),
        CharClass::NumberHead => lex_number(cursor),
        CharClass::Delimiter => lex_delimiter(c, cursor),
        CharClass::Operator => lex_operator(c, cursor),
        CharClass::Newline => lex_newline(cursor),
        CharClass::Space => return scan_token(cursor.trim()),
        CharClass::Other => lex_invalid(c, cursor),
    };
    debug_assert!(
        scanned.1.rest().len() < cursor.rest().len(),
        "sub-scanner made no progress at {}",
        cursor.pos()
    );
    Some(scanned)
}
