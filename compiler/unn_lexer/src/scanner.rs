//! Hand-written scanner producing [`Token`]s.
//!
//! The dispatcher in [`Scanner::next_token`] looks at the current byte,
//! skips whitespace, and hands the cursor to one sub-scanner per lexeme
//! class. A sub-scanner owns the cursor until it returns its token; there
//! is no backtracking across tokens.
//!
//! Malformed input never stops the scan. Unknown characters are skipped and
//! unterminated literals end at EOF; both are recorded as diagnostics.

use tracing::trace;
use unn_lexer_core::char_class::{
    is_digit, is_ident_char, is_operator_start, is_separator, is_whitespace,
};
use unn_lexer_core::{Cursor, EOF};

use crate::escape::resolve_escape;
use crate::{keywords, LexDiagnostic, LexOptions, Span, Token, TokenKind};

/// Pull-based scanner over one source text.
///
/// Yields tokens one at a time and collects diagnostics on the side.
/// Once EOF is reached every further call returns `None`.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    options: LexOptions,
    diagnostics: Vec<LexDiagnostic>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(source: &'a str, options: LexOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Current byte offset of the scan.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    /// Consume the scanner, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<LexDiagnostic> {
        self.diagnostics
    }

    /// Produce the next token, or `None` at EOF.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.pos();
            let token = match self.cursor.current() {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.cursor.eat_while(is_whitespace);
                    continue;
                }
                b'/' => self.slash_or_comment(start),
                b'"' => self.string(start),
                b';' | b'(' | b')' | b'{' | b'}' => self.separator(start),
                b'0'..=b'9' => self.number(start),
                b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
                b'+' | b'-' | b'*' | b'=' | b'!' => self.operator(start),
                _ => {
                    self.unknown(start);
                    continue;
                }
            };
            return Some(token);
        }
    }

    // ─── Helpers ───────────────────────────────────────────────────

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    /// Token whose lexeme is the raw source from `start` to the cursor.
    fn raw_token(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, self.cursor.slice_from(start), self.span_from(start))
    }

    fn report(&mut self, diagnostic: LexDiagnostic) {
        trace!(%diagnostic, "lexer diagnostic");
        self.diagnostics.push(diagnostic);
    }

    // ─── Numbers ───────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_digit);
        self.raw_token(TokenKind::Integer, start)
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_char);
        let text = self.cursor.slice_from(start);
        if keywords::is_keyword(text) {
            return self.raw_token(TokenKind::Keyword, start);
        }
        if self.options.report_unknown_keywords {
            self.report(LexDiagnostic::unknown_keyword(self.span_from(start), text));
        }
        self.raw_token(TokenKind::Identifier, start)
    }

    // ─── Strings ───────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume opening '"'
        let mut content = String::new();
        let mut run_start = self.cursor.pos();

        let terminated = loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    content.push_str(self.cursor.slice_from(run_start));
                    self.cursor.advance(); // consume closing '"'
                    break true;
                }
                b'\\' => {
                    content.push_str(self.cursor.slice_from(run_start));
                    self.cursor.advance(); // consume '\'
                    // A '\' right before EOF escapes nothing and is dropped.
                    if let Some(escaped) = self.cursor.current_char() {
                        content.push(resolve_escape(escaped));
                        self.cursor.advance_char();
                    }
                    run_start = self.cursor.pos();
                }
                _ => {
                    content.push_str(self.cursor.slice_from(run_start));
                    break false;
                }
            }
        };

        let span = self.span_from(start);
        if !terminated {
            self.report(LexDiagnostic::unterminated_string(span));
        }
        Token::new(TokenKind::String, content, span)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => self.line_comment(start),
            b'*' => self.block_comment(start),
            // Not a comment: `/` or `/=`.
            _ => self.operator_tail(start),
        }
    }

    fn line_comment(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume second '/'
        let body = self.cursor.pos();
        // The newline stays for the dispatcher's whitespace skip.
        self.cursor.eat_until_newline_or_eof();
        Token::new(
            TokenKind::Comment,
            self.cursor.slice_from(body),
            self.span_from(start),
        )
    }

    fn block_comment(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '*'
        let body = self.cursor.pos();
        let terminated = self.cursor.eat_until_block_comment_end();
        let content = self.cursor.slice_from(body);
        if terminated {
            self.cursor.advance_n(2); // consume "*/"
        }

        let span = self.span_from(start);
        if !terminated {
            self.report(LexDiagnostic::unterminated_block_comment(span));
        }
        Token::new(TokenKind::Comment, content, span)
    }

    // ─── Operators & Separators ────────────────────────────────────

    fn operator(&mut self, start: u32) -> Token {
        debug_assert!(is_operator_start(self.cursor.current()));
        self.cursor.advance(); // consume operator symbol
        self.operator_tail(start)
    }

    /// Finish an operator whose first symbol is already consumed.
    fn operator_tail(&mut self, start: u32) -> Token {
        if self.cursor.current() == b'=' {
            self.cursor.advance();
        }
        self.raw_token(TokenKind::Operator, start)
    }

    fn separator(&mut self, start: u32) -> Token {
        debug_assert!(is_separator(self.cursor.current()));
        self.cursor.advance();
        self.raw_token(TokenKind::Separator, start)
    }

    // ─── Unknown ───────────────────────────────────────────────────

    fn unknown(&mut self, start: u32) {
        let ch = self.cursor.current_char().unwrap_or(char::from(EOF));
        self.cursor.advance_char();
        self.report(LexDiagnostic::unknown_character(self.span_from(start), ch));
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests;
