use super::*;
use lox_ir::{LiteralValue, Token, TokenKind};
use pretty_assertions::assert_eq;

fn op(kind: TokenKind) -> Token {
    Token::synthetic(kind)
}

#[test]
fn negation_times_number() {
    let tree = Expr::binary(
        Expr::unary(op(TokenKind::Minus), Expr::literal(123.0)),
        op(TokenKind::Star),
        Expr::literal(2.0),
    );
    assert_eq!(print(&tree), Ok("(* (- 123) 2)".to_owned()));
}

#[test]
fn grouping_keeps_structure() {
    let tree = Expr::binary(
        Expr::literal(1.0),
        op(TokenKind::Plus),
        Expr::grouping(Expr::binary(
            Expr::literal(2.0),
            op(TokenKind::Star),
            Expr::literal(3.0),
        )),
    );
    assert_eq!(print(&tree), Ok("(+ 1 (group (* 2 3)))".to_owned()));
}

#[test]
fn literal_forms() {
    assert_eq!(print(&Expr::nil()), Ok("nil".to_owned()));
    assert_eq!(print(&Expr::literal(true)), Ok("true".to_owned()));
    assert_eq!(print(&Expr::literal(45.67)), Ok("45.67".to_owned()));
    assert_eq!(print(&Expr::literal("hi there")), Ok("hi there".to_owned()));
}

#[test]
fn operator_lexeme_is_printed_verbatim() {
    // the lexeme is printed, not the kind's canonical spelling
    let bang = Token::new(TokenKind::Bang, "!", None, 7);
    let tree = Expr::unary(bang, Expr::unary(op(TokenKind::Bang), Expr::literal(false)));
    assert_eq!(print(&tree), Ok("(! (! false))".to_owned()));

    let ge = Token::new(TokenKind::GreaterEqual, ">=", None, 1);
    let tree = Expr::binary(Expr::literal(1.0), ge, Expr::nil());
    assert_eq!(print(&tree), Ok("(>= 1 nil)".to_owned()));
}

#[test]
fn nested_groups() {
    let tree = Expr::grouping(Expr::grouping(Expr::literal(LiteralValue::Number(0.5))));
    assert_eq!(print(&tree), Ok("(group (group 0.5))".to_owned()));
}

#[test]
fn printer_is_reusable() {
    let mut printer = AstPrinter::new();
    let a = Expr::literal(1.0);
    let b = Expr::unary(op(TokenKind::Minus), Expr::literal(1.0));
    assert_eq!(printer.print(&a), Ok("1".to_owned()));
    assert_eq!(printer.print(&b), Ok("(- 1)".to_owned()));
    assert_eq!(printer.print(&a), Ok("1".to_owned()));
}

#[test]
fn deep_tree_prints() {
    let mut tree = Expr::literal(1.0);
    for _ in 0..1_000 {
        tree = Expr::grouping(tree);
    }
    let Ok(printed) = print(&tree) else {
        panic!("printing failed");
    };
    assert_eq!(printed.len(), 1_000 * "(group )".len() + 1);
    assert!(printed.starts_with("(group (group "));
    assert!(printed.ends_with(" 1))"));
}
