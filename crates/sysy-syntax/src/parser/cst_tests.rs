use crate::parser::cst::{SyntaxKind::*, SysyLang, TokenSet, token_sets};
use rowan::Language;

#[test]
fn test_token_set_contains() {
    let set = TokenSet::new(&[ParenOpen, ParenClose, Star]);
    assert!(set.contains(ParenOpen));
    assert!(set.contains(ParenClose));
    assert!(set.contains(Star));
    assert!(!set.contains(Plus));
    assert!(!set.contains(Semicolon));
}

#[test]
fn test_token_set_union() {
    let a = TokenSet::new(&[ParenOpen, ParenClose]);
    let b = TokenSet::new(&[Star, Plus]);
    let c = a.union(b);
    assert!(c.contains(ParenOpen));
    assert!(c.contains(ParenClose));
    assert!(c.contains(Star));
    assert!(c.contains(Plus));
    assert!(!c.contains(Semicolon));
}

#[test]
fn test_token_set_single() {
    let set = TokenSet::single(Semicolon);
    assert!(set.contains(Semicolon));
    assert!(!set.contains(ParenOpen));
}

#[test]
fn test_token_set_ignores_node_kinds() {
    assert!(!TokenSet::EMPTY.contains(SourceFile));
    assert!(!token_sets::EXPR_FIRST.contains(Lval));
}

#[test]
fn test_token_set_debug() {
    insta::assert_snapshot!(format!("{:?}", token_sets::TYPES), @"{KwInt, KwVoid}");
}

#[test]
fn test_is_trivia() {
    assert!(Whitespace.is_trivia());
    assert!(Newline.is_trivia());
    assert!(LineComment.is_trivia());
    assert!(BlockComment.is_trivia());
    assert!(UnterminatedComment.is_trivia());
    assert!(!ParenOpen.is_trivia());
    assert!(!Error.is_trivia());
}

#[test]
fn test_token_kinds_under_64() {
    assert!(
        (Error as u16) < 64,
        "token kinds reach {}, exceeding TokenSet capacity of 64",
        Error as u16
    );
}

#[test]
fn test_is_error() {
    assert!(Error.is_error());
    assert!(Garbage.is_error());
    assert!(BadNumber.is_error());
    assert!(!ParenOpen.is_error());
    assert!(!Ident.is_error());
    assert!(!Whitespace.is_error());
}

#[test]
fn test_token_and_node_partition() {
    assert!(Ident.is_token());
    assert!(Error.is_token());
    assert!(!SourceFile.is_token());
    assert!(SourceFile.is_node());
    assert!(Number.is_node());
    assert!(!__LAST.is_node());
}

#[test]
fn test_keywords_and_operators() {
    assert!(KwWhile.is_keyword());
    assert!(!Ident.is_keyword());
    assert!(AndAnd.is_operator());
    assert!(Assign.is_operator());
    assert!(!Semicolon.is_operator());
    assert!(Hexadecimal.is_number());
    assert!(!BadNumber.is_number());
}

#[test]
fn test_from_raw_bounds() {
    assert_eq!(crate::SyntaxKind::from_raw(0), Some(ParenOpen));
    assert_eq!(crate::SyntaxKind::from_raw(Number as u16), Some(Number));
    assert_eq!(crate::SyntaxKind::from_raw(__LAST as u16), None);
}

#[test]
fn test_rowan_kind_round_trip() {
    for kind in [ParenOpen, Ident, Garbage, SourceFile, Number] {
        assert_eq!(SysyLang::kind_from_raw(SysyLang::kind_to_raw(kind)), kind);
    }
}
