use super::*;
use crate::{lex, lex_with_options, LexDiagnosticKind};
use pretty_assertions::assert_eq;

/// Helper: lex a source string and return `(kind, lexeme)` pairs.
fn scan(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

/// Helper: lex and return kinds only.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.kinds().collect()
}

/// Helper: lex and return diagnostic kinds only.
fn scan_diagnostics(source: &str) -> Vec<LexDiagnosticKind> {
    lex(source).diagnostics.into_iter().map(|d| d.kind).collect()
}

fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
    (kind, lexeme.to_string())
}

// ─── Dispatcher ────────────────────────────────────────────────

#[test]
fn empty_source_has_no_tokens() {
    assert_eq!(scan(""), vec![]);
    assert!(lex("").diagnostics.is_empty());
}

#[test]
fn whitespace_only_source_has_no_tokens() {
    assert_eq!(scan(" \t\r\n  \n"), vec![]);
}

#[test]
fn statement() {
    assert_eq!(
        scan("if (x == 10) { printf(\"hi\"); }"),
        vec![
            tok(TokenKind::Keyword, "if"),
            tok(TokenKind::Separator, "("),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Operator, "=="),
            tok(TokenKind::Integer, "10"),
            tok(TokenKind::Separator, ")"),
            tok(TokenKind::Separator, "{"),
            tok(TokenKind::Keyword, "printf"),
            tok(TokenKind::Separator, "("),
            tok(TokenKind::String, "hi"),
            tok(TokenKind::Separator, ")"),
            tok(TokenKind::Separator, ";"),
            tok(TokenKind::Separator, "}"),
        ]
    );
}

#[test]
fn tokens_need_no_whitespace_between_them() {
    assert_eq!(
        scan("x=1;"),
        vec![
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Operator, "="),
            tok(TokenKind::Integer, "1"),
            tok(TokenKind::Separator, ";"),
        ]
    );
}

#[test]
fn scanner_is_fused_after_eof() {
    let mut scanner = Scanner::new("a");
    assert!(scanner.next_token().is_some());
    assert!(scanner.next_token().is_none());
    assert!(scanner.next_token().is_none());
    assert_eq!(scanner.pos(), 1);
}

#[test]
fn scanner_iterator_matches_lex() {
    let source = "while (i != 0) { i -= 1; } // done";
    let via_iter: Vec<Token> = Scanner::new(source).collect();
    assert_eq!(via_iter, lex(source).tokens.into_vec());
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integer() {
    assert_eq!(scan("42"), vec![tok(TokenKind::Integer, "42")]);
}

#[test]
fn long_integer_is_not_truncated() {
    let digits = "1234567890".repeat(10);
    assert_eq!(scan(&digits), vec![tok(TokenKind::Integer, &digits)]);
}

#[test]
fn leading_zeros_are_kept() {
    assert_eq!(scan("007"), vec![tok(TokenKind::Integer, "007")]);
}

#[test]
fn number_stops_at_non_digit() {
    assert_eq!(
        scan("12ab"),
        vec![
            tok(TokenKind::Integer, "12"),
            tok(TokenKind::Identifier, "ab"),
        ]
    );
}

#[test]
fn no_sign_or_decimal_point() {
    assert_eq!(
        scan("-3.5"),
        vec![
            tok(TokenKind::Operator, "-"),
            tok(TokenKind::Integer, "3"),
            tok(TokenKind::Integer, "5"),
        ]
    );
    assert_eq!(
        scan_diagnostics("3.5"),
        vec![LexDiagnosticKind::UnknownCharacter { ch: '.' }]
    );
}

// ─── Identifiers & Keywords ────────────────────────────────────

#[test]
fn every_keyword() {
    assert_eq!(
        scan_kinds("exit if else for while printf"),
        vec![TokenKind::Keyword; 6]
    );
    assert!(lex("exit if else for while printf").diagnostics.is_empty());
}

#[test]
fn keyword_if() {
    assert_eq!(scan("if"), vec![tok(TokenKind::Keyword, "if")]);
}

#[test]
fn unknown_word_is_identifier_with_note() {
    assert_eq!(scan("frobnicate"), vec![tok(TokenKind::Identifier, "frobnicate")]);
    assert_eq!(
        scan_diagnostics("frobnicate"),
        vec![LexDiagnosticKind::UnknownKeyword {
            word: "frobnicate".to_string()
        }]
    );
}

#[test]
fn unknown_keyword_notes_can_be_disabled() {
    let output = lex_with_options(
        "frobnicate",
        LexOptions {
            report_unknown_keywords: false,
        },
    );
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn keyword_prefix_is_part_of_longer_word() {
    assert_eq!(scan("iffy"), vec![tok(TokenKind::Identifier, "iffy")]);
    assert_eq!(scan("elsewhile"), vec![tok(TokenKind::Identifier, "elsewhile")]);
}

#[test]
fn identifier_stops_at_digit_and_underscore() {
    assert_eq!(
        scan("abc123"),
        vec![
            tok(TokenKind::Identifier, "abc"),
            tok(TokenKind::Integer, "123"),
        ]
    );
    assert_eq!(
        scan("foo_bar"),
        vec![
            tok(TokenKind::Identifier, "foo"),
            tok(TokenKind::Identifier, "bar"),
        ]
    );
    assert!(scan_diagnostics("foo_bar").contains(&LexDiagnosticKind::UnknownCharacter { ch: '_' }));
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn simple_string() {
    assert_eq!(scan(r#""hello world""#), vec![tok(TokenKind::String, "hello world")]);
}

#[test]
fn empty_string() {
    assert_eq!(scan(r#""""#), vec![tok(TokenKind::String, "")]);
}

#[test]
fn newline_escape_is_decoded() {
    let tokens = scan(r#""a\nb""#);
    assert_eq!(tokens, vec![tok(TokenKind::String, "a\nb")]);
    assert_eq!(tokens[0].1.chars().count(), 3);
}

#[test]
fn tab_escape_is_decoded() {
    assert_eq!(scan(r#""a\tb""#), vec![tok(TokenKind::String, "a\tb")]);
}

#[test]
fn other_escapes_drop_the_backslash() {
    assert_eq!(scan(r#""say \"hi\"""#), vec![tok(TokenKind::String, "say \"hi\"")]);
    assert_eq!(scan(r#""c:\\dir""#), vec![tok(TokenKind::String, "c:\\dir")]);
    assert_eq!(scan(r#""\q\r""#), vec![tok(TokenKind::String, "qr")]);
}

#[test]
fn escaped_multibyte_character() {
    assert_eq!(scan("\"\\\u{e9}\""), vec![tok(TokenKind::String, "\u{e9}")]);
}

#[test]
fn string_keeps_raw_newlines() {
    assert_eq!(scan("\"two\nlines\""), vec![tok(TokenKind::String, "two\nlines")]);
}

#[test]
fn string_keeps_comment_markers() {
    assert_eq!(scan(r#""// not /* a comment""#), vec![tok(TokenKind::String, "// not /* a comment")]);
}

#[test]
fn unterminated_string() {
    assert_eq!(scan(r#""abc"#), vec![tok(TokenKind::String, "abc")]);
    assert_eq!(
        scan_diagnostics(r#""abc"#),
        vec![LexDiagnosticKind::UnterminatedString]
    );
}

#[test]
fn unterminated_string_with_trailing_backslash() {
    assert_eq!(scan("\"abc\\"), vec![tok(TokenKind::String, "abc")]);
    assert_eq!(
        scan_diagnostics("\"abc\\"),
        vec![LexDiagnosticKind::UnterminatedString]
    );
}

#[test]
fn escaped_quote_does_not_terminate() {
    assert_eq!(scan(r#""abc\""#), vec![tok(TokenKind::String, "abc\"")]);
    assert_eq!(
        scan_diagnostics(r#""abc\""#),
        vec![LexDiagnosticKind::UnterminatedString]
    );
}

#[test]
fn string_span_includes_quotes() {
    let output = lex(r#"x "a\tb" y"#);
    assert_eq!(output.tokens[1].span, Span::new(2, 8));
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment() {
    assert_eq!(scan("// hello world"), vec![tok(TokenKind::Comment, " hello world")]);
}

#[test]
fn line_comment_ends_at_newline() {
    assert_eq!(
        scan("// note\nexit;"),
        vec![
            tok(TokenKind::Comment, " note"),
            tok(TokenKind::Keyword, "exit"),
            tok(TokenKind::Separator, ";"),
        ]
    );
}

#[test]
fn line_comment_does_not_consume_newline() {
    let output = lex("//x\ny");
    assert_eq!(output.tokens[0].span, Span::new(0, 3));
    assert_eq!(output.tokens[1].span, Span::new(4, 5));
}

#[test]
fn empty_line_comment() {
    assert_eq!(scan("//"), vec![tok(TokenKind::Comment, "")]);
}

#[test]
fn block_comment() {
    assert_eq!(scan("/* x */"), vec![tok(TokenKind::Comment, " x ")]);
}

#[test]
fn block_comment_consumes_both_closing_characters() {
    let mut scanner = Scanner::new("/* x */");
    let token = scanner.next_token();
    assert_eq!(token.map(|t| t.span), Some(Span::new(0, 7)));
    assert_eq!(scanner.pos(), 7);
    assert!(scanner.next_token().is_none());
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn block_comment_followed_by_code() {
    assert_eq!(
        scan("/*a*/b/"),
        vec![
            tok(TokenKind::Comment, "a"),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::Operator, "/"),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan("/* one\n * two\n */ exit"),
        vec![
            tok(TokenKind::Comment, " one\n * two\n "),
            tok(TokenKind::Keyword, "exit"),
        ]
    );
}

#[test]
fn empty_block_comment() {
    assert_eq!(scan("/**/"), vec![tok(TokenKind::Comment, "")]);
}

#[test]
fn block_comments_do_not_nest() {
    assert_eq!(
        scan("/* a /* b */ c */"),
        vec![
            tok(TokenKind::Comment, " a /* b "),
            tok(TokenKind::Identifier, "c"),
            tok(TokenKind::Operator, "*"),
            tok(TokenKind::Operator, "/"),
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(scan("/* open"), vec![tok(TokenKind::Comment, " open")]);
    assert_eq!(
        scan_diagnostics("/* open"),
        vec![LexDiagnosticKind::UnterminatedBlockComment]
    );
}

#[test]
fn slash_star_slash_is_unterminated() {
    assert_eq!(scan("/*/"), vec![tok(TokenKind::Comment, "/")]);
    assert_eq!(
        scan_diagnostics("/*/"),
        vec![LexDiagnosticKind::UnterminatedBlockComment]
    );
}

// ─── Operators ─────────────────────────────────────────────────

#[test]
fn single_character_operators() {
    for op in ["+", "-", "*", "/", "=", "!"] {
        assert_eq!(scan(op), vec![tok(TokenKind::Operator, op)], "operator {op:?}");
    }
}

#[test]
fn compound_operators() {
    for op in ["==", "!=", "+=", "-=", "*=", "/="] {
        assert_eq!(scan(op), vec![tok(TokenKind::Operator, op)], "operator {op:?}");
    }
}

#[test]
fn standalone_slash_is_division() {
    assert_eq!(
        scan("a / b"),
        vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Operator, "/"),
            tok(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn triple_equals_splits() {
    assert_eq!(
        scan("==="),
        vec![tok(TokenKind::Operator, "=="), tok(TokenKind::Operator, "=")]
    );
}

#[test]
fn operators_without_equals_do_not_combine() {
    assert_eq!(
        scan("+-"),
        vec![tok(TokenKind::Operator, "+"), tok(TokenKind::Operator, "-")]
    );
}

// ─── Separators ────────────────────────────────────────────────

#[test]
fn each_separator() {
    for sep in [";", "(", ")", "{", "}"] {
        assert_eq!(scan(sep), vec![tok(TokenKind::Separator, sep)], "separator {sep:?}");
    }
}

#[test]
fn brackets_are_not_separators() {
    assert_eq!(scan("[]"), vec![]);
    assert_eq!(
        scan_diagnostics("[]"),
        vec![
            LexDiagnosticKind::UnknownCharacter { ch: '[' },
            LexDiagnosticKind::UnknownCharacter { ch: ']' },
        ]
    );
}

// ─── Unknown characters ────────────────────────────────────────

#[test]
fn unknown_character_is_skipped() {
    let output = lex("a @ b");
    let lexemes: Vec<&str> = output.tokens.iter().map(Token::lexeme).collect();
    assert_eq!(lexemes, vec!["a", "b"]);

    let unknown: Vec<&LexDiagnostic> = output
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, LexDiagnosticKind::UnknownCharacter { .. }))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].kind, LexDiagnosticKind::UnknownCharacter { ch: '@' });
    assert_eq!(unknown[0].span, Span::new(2, 3));
}

#[test]
fn unknown_multibyte_character_is_one_diagnostic() {
    let output = lex("x \u{3bb} y");
    assert_eq!(output.tokens.len(), 2);
    let unknown: Vec<&LexDiagnostic> = output
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, LexDiagnosticKind::UnknownCharacter { .. }))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].span, Span::new(2, 4));
}

#[test]
fn interior_null_is_unknown_character() {
    assert_eq!(scan("1\02"), vec![tok(TokenKind::Integer, "1"), tok(TokenKind::Integer, "2")]);
    assert_eq!(
        scan_diagnostics("1\02"),
        vec![LexDiagnosticKind::UnknownCharacter { ch: '\0' }]
    );
}

#[test]
fn vertical_tab_is_not_whitespace() {
    assert_eq!(
        scan_diagnostics("\u{b}"),
        vec![LexDiagnosticKind::UnknownCharacter { ch: '\u{b}' }]
    );
}

// ─── Output invariants ─────────────────────────────────────────

#[test]
fn raw_lexemes_match_source_spans() {
    let source = "for (i = 0; i != 10; i += 1) { printf(i); } exit;";
    for token in &lex(source).tokens {
        assert!(!token.kind.is_decoded());
        assert_eq!(token.lexeme, &source[token.span.to_range()]);
    }
}

#[test]
fn rescanning_is_idempotent() {
    let source = "/* c */ if (a == 1) { printf(\"x\\n\"); } // end\n@";
    assert_eq!(lex(source), lex(source));
}

#[test]
fn program_with_mixed_input() {
    let source = "exit(0); // bye\n\"s\" $ 5";
    let output = lex(source);
    assert_eq!(
        output.tokens.kinds().collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword,
            TokenKind::Separator,
            TokenKind::Integer,
            TokenKind::Separator,
            TokenKind::Separator,
            TokenKind::Comment,
            TokenKind::String,
            TokenKind::Integer,
        ]
    );
    assert!(output.has_warnings());
    assert_eq!(output.warnings().count(), 1);
}
