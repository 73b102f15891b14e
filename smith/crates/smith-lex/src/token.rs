//! Token definitions for the Smith lexer.
//!
//! Every token carries the exact source text it was scanned from (no
//! normalisation) and the [`Span`] it covers.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smith_util::span::Span;

/// Unit of an indentation run. Only spaces indent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentUnit {
    /// The space character
    #[default]
    Space,
}

/// A lexical token.
///
/// # Serialized form
///
/// Tokens serialize with an internal `kind` tag and carry their source text
/// in `value` whatever the kind, e.g.
/// `{"kind":"delimiter","value":"(","span":{...}}`, so expected token lists
/// can be written by hand in test case files.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// Name: `[a-zA-Z_][a-zA-Z0-9_]*`
    Symbol {
        /// Source text
        value: String,
        /// Covered range
        span: Span,
    },

    /// Integer literal: digits only
    Int {
        /// Source text
        value: String,
        /// Covered range
        span: Span,
    },

    /// Float literal: digits with one internal decimal point, or a leading one
    Float {
        /// Source text
        value: String,
        /// Covered range
        span: Span,
    },

    /// One of `( ) [ ] { } , :`
    Delimiter {
        /// The delimiter character
        value: char,
        /// Covered range
        span: Span,
    },

    /// One of `+ - * / = .`
    Operator {
        /// The operator character
        value: char,
        /// Covered range
        span: Span,
    },

    /// Leading indentation of a line, emitted after every newline run.
    ///
    /// The span covers only the indentation, never the newlines, and is
    /// zero-width for an unindented line.
    Indent {
        /// What the indentation is made of
        #[serde(default)]
        unit: IndentUnit,
        /// Number of units
        count: u32,
        /// Covered range
        span: Span,
    },

    /// A character no other token accepts
    Invalid {
        /// The offending character
        value: char,
        /// Covered range, always one character wide
        span: Span,
    },
}

/// The kind of a [`Token`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::Symbol`]
    Symbol,
    /// [`Token::Int`]
    Int,
    /// [`Token::Float`]
    Float,
    /// [`Token::Delimiter`]
    Delimiter,
    /// [`Token::Operator`]
    Operator,
    /// [`Token::Indent`]
    Indent,
    /// [`Token::Invalid`]
    Invalid,
}

impl TokenKind {
    /// Lowercase name, as used in the serialized `kind` tag
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Symbol => "symbol",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Operator => "operator",
            TokenKind::Indent => "indent",
            TokenKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    /// Creates a symbol token.
    pub fn symbol(text: impl Into<String>, span: Span) -> Self {
        Token::Symbol {
            value: text.into(),
            span,
        }
    }

    /// Creates an integer token.
    pub fn int(text: impl Into<String>, span: Span) -> Self {
        Token::Int {
            value: text.into(),
            span,
        }
    }

    /// Creates a float token.
    pub fn float(text: impl Into<String>, span: Span) -> Self {
        Token::Float {
            value: text.into(),
            span,
        }
    }

    /// Creates a delimiter token.
    pub fn delimiter(value: char, span: Span) -> Self {
        Token::Delimiter { value, span }
    }

    /// Creates an operator token.
    pub fn operator(value: char, span: Span) -> Self {
        Token::Operator { value, span }
    }

    /// Creates a space indentation token.
    pub fn indent(count: u32, span: Span) -> Self {
        Token::Indent {
            unit: IndentUnit::Space,
            count,
            span,
        }
    }

    /// Creates an invalid-character token.
    pub fn invalid(value: char, span: Span) -> Self {
        Token::Invalid { value, span }
    }

    /// The kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Symbol { .. } => TokenKind::Symbol,
            Token::Int { .. } => TokenKind::Int,
            Token::Float { .. } => TokenKind::Float,
            Token::Delimiter { .. } => TokenKind::Delimiter,
            Token::Operator { .. } => TokenKind::Operator,
            Token::Indent { .. } => TokenKind::Indent,
            Token::Invalid { .. } => TokenKind::Invalid,
        }
    }

    /// The source range this token covers
    pub fn span(&self) -> Span {
        match self {
            Token::Symbol { span, .. }
            | Token::Int { span, .. }
            | Token::Float { span, .. }
            | Token::Delimiter { span, .. }
            | Token::Operator { span, .. }
            | Token::Indent { span, .. }
            | Token::Invalid { span, .. } => *span,
        }
    }

    /// The exact source text covered by [`Token::span`].
    ///
    /// # Example
    ///
    /// ```
    /// use smith_lex::Token;
    /// use smith_util::span::{Pos, Span};
    ///
    /// let indent = Token::indent(2, Span::single_line(Pos::new(1, 0), 2));
    /// assert_eq!(indent.text(), "  ");
    /// ```
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Symbol { value, .. } | Token::Int { value, .. } | Token::Float { value, .. } => {
                Cow::Borrowed(value)
            }
            Token::Delimiter { value, .. }
            | Token::Operator { value, .. }
            | Token::Invalid { value, .. } => Cow::Owned(value.to_string()),
            Token::Indent { count, .. } => Cow::Owned(" ".repeat(*count as usize)),
        }
    }

    /// Returns true for [`Token::Invalid`]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Indent { count, span, .. } => write!(f, "indent {count} {span}"),
            _ => write!(f, "{} {:?} {}", self.kind(), self.text(), self.span()),
        }
    }
}
