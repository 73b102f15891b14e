//! Character classification for the Smith lexer.
//!
//! Pure predicates partitioning the input alphabet. Only ASCII letters and
//! digits take part in symbols and numbers; anything outside the classes
//! below is lexed as an invalid character.

/// Single-character delimiters.
pub const DELIMITERS: [char; 8] = ['(', ')', '[', ']', '{', '}', ',', ':'];

/// Single-character operators. No operator is ever longer than one character.
pub const OPERATORS: [char; 6] = ['+', '-', '*', '/', '=', '.'];

/// Checks if a character can start a symbol.
///
/// # Example
///
/// ```
/// use smith_lex::classify::is_symbol_head;
///
/// assert!(is_symbol_head('a'));
/// assert!(is_symbol_head('Z'));
/// assert!(is_symbol_head('_'));
/// assert!(!is_symbol_head('1'));
/// assert!(!is_symbol_head('α'));
/// ```
pub fn is_symbol_head(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue a symbol.
///
/// # Example
///
/// ```
/// use smith_lex::classify::is_symbol_tail;
///
/// assert!(is_symbol_tail('_'));
/// assert!(is_symbol_tail('9'));
/// assert!(!is_symbol_tail('.'));
/// ```
pub fn is_symbol_tail(c: char) -> bool {
    is_symbol_head(c) || is_digit(c)
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a delimiter.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Checks if a character is an operator.
///
/// `.` is an operator, but see [`CharClass::of`] for how it is dispatched.
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Checks if a character ends a line. Only `\n` does; `\r` is invalid.
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Checks if a character is horizontal whitespace. Only the space character
/// is; a tab is invalid.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' '
}

/// The class a character belongs to when it starts a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letter or underscore, starts a symbol
    SymbolHead,
    /// Digit or `.`, enters the numeric scanner
    NumberHead,
    /// One of [`DELIMITERS`]
    Delimiter,
    /// One of [`OPERATORS`] other than `.`
    Operator,
    /// `\n`
    Newline,
    /// ` `
    Space,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classifies the first character of a token.
    ///
    /// The classes are disjoint except for `.`, which is both an operator and
    /// a possible decimal point. It is classified as [`CharClass::NumberHead`]
    /// because only the numeric scanner can tell `.24` from `3.max`; it hands
    /// a lone dot back as an operator token.
    ///
    /// # Example
    ///
    /// ```
    /// use smith_lex::classify::CharClass;
    ///
    /// assert_eq!(CharClass::of('x'), CharClass::SymbolHead);
    /// assert_eq!(CharClass::of('.'), CharClass::NumberHead);
    /// assert_eq!(CharClass::of('+'), CharClass::Operator);
    /// assert_eq!(CharClass::of('\t'), CharClass::Other);
    /// ```
    pub fn of(c: char) -> Self {
        if is_symbol_head(c) {
            CharClass::SymbolHead
        } else if is_digit(c) || c == '.' {
            CharClass::NumberHead
        } else if is_delimiter(c) {
            CharClass::Delimiter
        } else if is_operator(c) {
            CharClass::Operator
        } else if is_newline(c) {
            CharClass::Newline
        } else if is_space(c) {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }
}
