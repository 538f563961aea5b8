//! Token kinds and tokens produced by the scanner.

use std::fmt;

use crate::Span;

/// Classification of a scanned lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Run of ASCII digits. The lexeme is the exact digit run.
    Integer,
    /// Alphabetic run found in the keyword table.
    Keyword,
    /// Alphabetic run not found in the keyword table.
    Identifier,
    /// `+ - * / = !`, optionally followed by `=`.
    Operator,
    /// `; ( ) { }`.
    Separator,
    /// Double-quoted string. The lexeme is the decoded content.
    String,
    /// Line or block comment. The lexeme excludes the delimiters.
    Comment,
}

impl TokenKind {
    /// Upper-case tag used by the token trace printer (`INT`, `KEYWORD`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
        }
    }

    /// Whether tokens of this kind carry decoded text rather than a raw
    /// source slice.
    pub const fn is_decoded(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified lexeme.
///
/// Each token owns its lexeme. For strings and comments the lexeme is the
/// decoded content; for every other kind it equals `source[span]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Raw source range, delimiters included.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The lexeme as a string slice.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Check if this token is a keyword with the given text.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == text
    }
}

/// Two-line trace format: `Token Value: <lexeme>` then `Type: <KIND>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Token Value: {}", self.lexeme)?;
        write!(f, "Type: {}", self.kind)
    }
}
