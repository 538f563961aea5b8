//! Escape resolution for string literals.
//!
//! Only `\n` and `\t` have a special meaning. Any other escaped character
//! stands for itself, so `\"` is a quote, `\\` a backslash and `\q` a `q`.

/// Resolve the character following a `\` inside a string literal.
#[inline]
pub(crate) fn resolve_escape(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}
