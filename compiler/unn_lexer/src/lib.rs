//! Lexer for the unn toy language.
//!
//! Turns source text into a [`TokenList`] plus a list of non-fatal
//! [`LexDiagnostic`]s. Lexing cannot fail: malformed input is recovered
//! from locally and reported on the side.
//!
//! ```
//! use unn_lexer::{lex, TokenKind};
//!
//! let output = lex("if (x == 1) { exit; }");
//! assert_eq!(output.tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(output.tokens[3].lexeme, "==");
//! ```

mod escape;
pub mod keywords;
mod lex_diagnostic;
mod scanner;
mod span;
mod token;
mod token_list;

use tracing::debug;

pub use keywords::Keyword;
pub use lex_diagnostic::{LexDiagnostic, LexDiagnosticKind, Severity};
pub use scanner::Scanner;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use token_list::TokenList;

/// Tunable behaviour of the scanner.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexOptions {
    /// Record a note for every alphabetic run that is not a keyword.
    pub report_unknown_keywords: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            report_unknown_keywords: true,
        }
    }
}

/// Result of lexing one source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub diagnostics: Vec<LexDiagnostic>,
}

impl LexOutput {
    /// Whether any diagnostic of warning severity was recorded.
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Diagnostics of warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &LexDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }

    /// Split into tokens and diagnostics.
    pub fn into_parts(self) -> (TokenList, Vec<LexDiagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Lex source text with default options.
pub fn lex(source: &str) -> LexOutput {
    lex_with_options(source, LexOptions::default())
}

/// Lex source text.
///
/// Runs the scanner to EOF, collecting every token in source order.
pub fn lex_with_options(source: &str, options: LexOptions) -> LexOutput {
    let mut scanner = Scanner::with_options(source, options);
    let mut tokens = TokenList::new();
    while let Some(token) = scanner.next_token() {
        tokens.push(token);
    }
    let diagnostics = scanner.into_diagnostics();

    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed source"
    );

    LexOutput {
        tokens,
        diagnostics,
    }
}
