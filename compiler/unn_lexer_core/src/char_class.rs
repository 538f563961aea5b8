//! Fixed character classes of the unn language.
//!
//! All classification is ASCII-only. Bytes outside these classes (including
//! every non-ASCII byte) are unknown characters to the scanner.

/// Whitespace skipped between tokens: space, tab, newline, carriage return.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Single-character structural tokens: `;`, `(`, `)`, `{`, `}`.
#[inline]
pub const fn is_separator(byte: u8) -> bool {
    matches!(byte, b';' | b'(' | b')' | b'{' | b'}')
}

/// Bytes that start an operator: `+`, `-`, `*`, `/`, `=`, `!`.
///
/// `/` is also the start of a comment; the scanner checks for comments
/// before it falls back to an operator.
#[inline]
pub const fn is_operator_start(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'*' | b'/' | b'=' | b'!')
}

/// Digits of an integer literal.
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Letters of a keyword or identifier. Digits and `_` are not included.
#[inline]
pub const fn is_ident_char(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}
