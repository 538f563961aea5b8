use super::*;
use crate::Span;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, start: u32) -> Token {
    let end = start + u32::try_from(text.len()).unwrap_or(u32::MAX);
    Token::new(kind, text, Span::new(start, end))
}

#[test]
fn push_preserves_order() {
    let mut list = TokenList::new();
    list.push(tok(TokenKind::Keyword, "if", 0));
    list.push(tok(TokenKind::Separator, "(", 2));
    list.push(tok(TokenKind::Integer, "1", 3));

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.kinds().collect::<Vec<_>>(),
        vec![TokenKind::Keyword, TokenKind::Separator, TokenKind::Integer]
    );
    assert_eq!(list[2].lexeme(), "1");
    assert_eq!(list.get(3), None);
}

#[test]
fn grows_past_initial_capacity() {
    let mut list = TokenList::with_capacity(2);
    for i in 0..1000 {
        list.push(tok(TokenKind::Integer, "7", i));
    }
    assert_eq!(list.len(), 1000);
    assert!(list.iter().all(|t| t.lexeme == "7"));
}

#[test]
fn empty_list() {
    let list = TokenList::default();
    assert!(list.is_empty());
    assert!(list.as_slice().is_empty());
    assert_eq!(list.iter().count(), 0);
}

#[test]
fn collect_and_into_vec_round_trip() {
    let tokens = vec![
        tok(TokenKind::Operator, "+=", 0),
        tok(TokenKind::Identifier, "x", 3),
    ];
    let list: TokenList = tokens.clone().into_iter().collect();
    assert_eq!(list, TokenList::from_vec(tokens.clone()));
    assert_eq!(list.into_vec(), tokens);
}

#[test]
fn borrowing_iteration() {
    let list = TokenList::from_vec(vec![tok(TokenKind::Separator, ";", 0)]);
    let mut seen = 0;
    for token in &list {
        assert_eq!(token.kind, TokenKind::Separator);
        seen += 1;
    }
    assert_eq!(seen, 1);
}
