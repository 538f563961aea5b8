//! Non-fatal lexer diagnostics.
//!
//! Scanning never fails. Anything worth reporting about the input is
//! recorded as a [`LexDiagnostic`] and returned next to the token stream;
//! the caller decides whether and how to show it.

use std::fmt;

use crate::Span;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// Informational; the input was handled normally.
    Note,
    /// Input was malformed and recovered from locally.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What the lexer noticed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexDiagnosticKind {
    /// A character outside every class of the language. It was skipped.
    UnknownCharacter { ch: char },
    /// An alphabetic run that is not a keyword. It became an identifier.
    UnknownKeyword { word: String },
    /// End of input inside a string literal.
    UnterminatedString,
    /// End of input inside a block comment.
    UnterminatedBlockComment,
}

/// A diagnostic with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexDiagnostic {
    /// WHERE it was found.
    pub span: Span,
    /// WHAT was found.
    pub kind: LexDiagnosticKind,
}

impl LexDiagnostic {
    pub fn unknown_character(span: Span, ch: char) -> Self {
        LexDiagnostic {
            span,
            kind: LexDiagnosticKind::UnknownCharacter { ch },
        }
    }

    pub fn unknown_keyword(span: Span, word: impl Into<String>) -> Self {
        LexDiagnostic {
            span,
            kind: LexDiagnosticKind::UnknownKeyword { word: word.into() },
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexDiagnostic {
            span,
            kind: LexDiagnosticKind::UnterminatedString,
        }
    }

    pub fn unterminated_block_comment(span: Span) -> Self {
        LexDiagnostic {
            span,
            kind: LexDiagnosticKind::UnterminatedBlockComment,
        }
    }

    /// Severity of this diagnostic.
    ///
    /// Non-keyword identifiers are notes; everything else is a warning.
    pub fn severity(&self) -> Severity {
        match self.kind {
            LexDiagnosticKind::UnknownKeyword { .. } => Severity::Note,
            LexDiagnosticKind::UnknownCharacter { .. }
            | LexDiagnosticKind::UnterminatedString
            | LexDiagnosticKind::UnterminatedBlockComment => Severity::Warning,
        }
    }

    /// Human-readable message, without location.
    pub fn message(&self) -> String {
        match &self.kind {
            LexDiagnosticKind::UnknownCharacter { ch } => {
                format!("found unknown character {ch:?}")
            }
            LexDiagnosticKind::UnknownKeyword { word } => {
                format!("found unknown keyword `{word}`, treating it as an identifier")
            }
            LexDiagnosticKind::UnterminatedString => {
                "unterminated string literal: missing closing `\"`".to_string()
            }
            LexDiagnosticKind::UnterminatedBlockComment => {
                "unterminated block comment: missing closing `*/`".to_string()
            }
        }
    }
}

impl fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.severity(), self.message(), self.span)
    }
}
