//! Newline and indentation lexing.

use crate::classify::is_space;
use crate::cursor::Cursor;
use crate::token::Token;

use super::core::Scanned;

/// Lexes a run of newlines and the indentation of the line it ends on.
///
/// All consecutive `\n` characters are consumed together, so blank lines
/// collapse into one [`Token::Indent`]. The token's span covers the leading
/// spaces of the new line only and is zero-width when there are none.
pub(super) fn lex_newline(cursor: Cursor<'_>) -> Scanned<'_> {
    let (_, cursor) = cursor.skip_newlines();
    let (text, span, next) = cursor.take_while(is_space);
    (Token::indent(text.len() as u32, span), next)
}
