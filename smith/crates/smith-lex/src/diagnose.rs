//! Diagnostics for invalid characters.

use smith_util::diagnostic::{Diagnostic, Level};

use crate::token::Token;

/// Converts every [`Token::Invalid`] in `tokens` into a diagnostic at `level`.
///
/// The lexer never reports anything itself; callers decide whether an
/// unexpected character is an error, a warning or nothing at all.
///
/// # Example
///
/// ```
/// use smith_lex::{diagnose, tokenize};
/// use smith_util::Level;
///
/// let diagnostics = diagnose(&tokenize("a\tb"), Level::Warning);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].message, "unexpected character '\\t'");
/// ```
pub fn diagnose(tokens: &[Token], level: Level) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter_map(|token| match *token {
            Token::Invalid { value, span } => {
                let diagnostic = Diagnostic::new(
                    level,
                    format!("unexpected character {:?}", value),
                    span,
                );
                Some(match value {
                    '\t' => diagnostic.with_note("tabs are not allowed; indent with spaces"),
                    '\r' => diagnostic.with_note("line endings must be `\\n`, not `\\r\\n`"),
                    _ => diagnostic,
                })
            }
            _ => None,
        })
        .collect()
}
