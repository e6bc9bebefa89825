use super::*;
use pretty_assertions::assert_eq;

// === Keyword Table ===

#[test]
fn every_keyword_round_trips_through_its_spelling() {
    for kind in TokenKind::KEYWORDS {
        assert_eq!(TokenKind::keyword(kind.as_str()), Some(kind), "{kind:?}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn classify_falls_back_to_identifier() {
    assert_eq!(classify("class"), TokenKind::Class);
    assert_eq!(classify("classifier"), TokenKind::Identifier);
    assert_eq!(classify("x"), TokenKind::Identifier);
    assert_eq!(classify("_while"), TokenKind::Identifier);
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(classify("Class"), TokenKind::Identifier);
    assert_eq!(classify("NIL"), TokenKind::Identifier);
    assert_eq!(classify("True"), TokenKind::Identifier);
}

#[test]
fn keyword_lookup_rejects_prefixes_and_extensions() {
    assert_eq!(TokenKind::keyword("ret"), None);
    assert_eq!(TokenKind::keyword("returns"), None);
    assert_eq!(TokenKind::keyword("i"), None);
    assert_eq!(TokenKind::keyword(""), None);
}

#[test]
fn non_keyword_kinds_are_not_keywords() {
    for kind in [
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Eof,
        TokenKind::BangEqual,
        TokenKind::LeftParen,
    ] {
        assert!(!kind.is_keyword(), "{kind:?}");
    }
}

// === Display ===

#[test]
fn kind_display_uses_source_spelling() {
    assert_eq!(TokenKind::BangEqual.to_string(), "!=");
    assert_eq!(TokenKind::LessEqual.to_string(), "<=");
    assert_eq!(TokenKind::While.to_string(), "while");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}

#[test]
fn token_display_includes_literal_when_present() {
    let number = Token::new(
        TokenKind::Number,
        "1.5",
        Some(TokenLiteral::Number(1.5)),
        1,
    );
    assert_eq!(number.to_string(), "Number 1.5 1.5");

    let string = Token::new(
        TokenKind::String,
        "\"hi\"",
        Some(TokenLiteral::Str("hi".into())),
        2,
    );
    assert_eq!(string.to_string(), "String \"hi\" hi");

    let ident = Token::new(TokenKind::Identifier, "x", None, 1);
    assert_eq!(ident.to_string(), "Identifier x");
}

#[test]
fn token_display_names_the_kind_by_variant() {
    assert_eq!(Token::synthetic(TokenKind::BangEqual).to_string(), "BangEqual !=");
    assert_eq!(Token::synthetic(TokenKind::Var).to_string(), "Var var");
    assert_eq!(Token::eof(3).to_string(), "Eof ");
}

#[test]
fn integral_number_literal_displays_without_fraction() {
    assert_eq!(TokenLiteral::Number(1.0).to_string(), "1");
    assert_eq!(TokenLiteral::Number(0.25).to_string(), "0.25");
}

// === Construction ===

#[test]
fn synthetic_token_uses_canonical_spelling() {
    let token = Token::synthetic(TokenKind::Star);
    assert_eq!(token, Token::new(TokenKind::Star, "*", None, 1));
}

#[test]
fn eof_token_has_empty_lexeme() {
    let token = Token::eof(7);
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.lexeme, "");
    assert_eq!(token.literal, None);
    assert_eq!(token.line, 7);
}

#[test]
fn token_equality_is_structural() {
    let a = Token::new(TokenKind::Identifier, "x", None, 1);
    assert_eq!(a, Token::new(TokenKind::Identifier, "x", None, 1));
    assert_ne!(a, Token::new(TokenKind::Identifier, "x", None, 2));
    assert_ne!(a, Token::new(TokenKind::Identifier, "y", None, 1));
    assert_ne!(
        a,
        Token::new(
            TokenKind::Identifier,
            "x",
            Some(TokenLiteral::Str("x".into())),
            1
        )
    );
}

// === TokenList ===

#[test]
fn token_list_preserves_order() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::synthetic(TokenKind::LeftParen));
    list.push(Token::synthetic(TokenKind::RightParen));
    list.push(Token::eof(1));

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.kinds(),
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
    assert_eq!(list[1].lexeme, ")");
    assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(list.get(3), None);
}

#[test]
fn token_list_debug_lists_one_token_per_line() {
    let list = TokenList::from_vec(vec![Token::synthetic(TokenKind::Plus), Token::eof(1)]);
    let rendered = format!("{list:?}");
    assert_eq!(
        rendered,
        "TokenList (2 tokens) [\n  Plus \"+\" @ line 1\n  Eof \"\" @ line 1\n]"
    );
}
