//! Lexer module.
//!
//! The scanner is split into one driving loop and one sub-scanner per token
//! class:
//! - `core` - `Lexer` iterator, `tokenize` and dispatch
//! - `symbol` - Symbol lexing
//! - `number` - Integer/float lexing and decimal-point disambiguation
//! - `punct` - Delimiter, operator and invalid-character lexing
//! - `newline` - Newline runs and indentation
//!
//! Every sub-scanner takes a [`Cursor`](crate::cursor::Cursor) by value,
//! consumes at least one character and returns the token together with the
//! advanced cursor.

mod core;
mod newline;
mod number;
mod punct;
mod symbol;

pub use self::core::{tokenize, Lexer};
