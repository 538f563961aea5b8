//! Keyword table.
//!
//! The language reserves six words. Lookup is exact and case-sensitive;
//! `If` and `IF` are identifiers.

use std::fmt;

/// A reserved word of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Exit,
    If,
    Else,
    For,
    While,
    Printf,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Exit,
        Keyword::If,
        Keyword::Else,
        Keyword::For,
        Keyword::While,
        Keyword::Printf,
    ];

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Exit => "exit",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Printf => "printf",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a keyword by text.
///
/// Uses the length as a first-pass filter: keywords are 2-6 bytes, so
/// longer identifier runs are rejected without any comparison.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    match text.len() {
        2 => match text {
            "if" => Some(Keyword::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            _ => None,
        },
        4 => match text {
            "exit" => Some(Keyword::Exit),
            "else" => Some(Keyword::Else),
            _ => None,
        },
        5 => match text {
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "printf" => Some(Keyword::Printf),
            _ => None,
        },
        _ => None,
    }
}

/// Check whether `text` is a keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
