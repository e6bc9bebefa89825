//! Reserved-word table.
//!
//! Keywords are recognized after the fact: the scanner lexes every
//! identifier-shaped run, then asks this table whether the exact text is a
//! reserved word. Matching is case-sensitive and whole-lexeme only, so
//! `Class` and `classifier` stay identifiers.
//!
//! Lookup buckets by length first (all keywords are 2-6 bytes) so most
//! identifiers are rejected without a string comparison.

use super::TokenKind;

impl TokenKind {
    /// Look up a reserved word by its exact text.
    ///
    /// Returns `None` for anything that is not one of the sixteen keywords.
    #[inline]
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text.len() {
            2 => match text {
                "if" => Some(TokenKind::If),
                "or" => Some(TokenKind::Or),
                _ => None,
            },
            3 => match text {
                "and" => Some(TokenKind::And),
                "for" => Some(TokenKind::For),
                "fun" => Some(TokenKind::Fun),
                "nil" => Some(TokenKind::Nil),
                "var" => Some(TokenKind::Var),
                _ => None,
            },
            4 => match text {
                "else" => Some(TokenKind::Else),
                "this" => Some(TokenKind::This),
                "true" => Some(TokenKind::True),
                _ => None,
            },
            5 => match text {
                "class" => Some(TokenKind::Class),
                "false" => Some(TokenKind::False),
                "print" => Some(TokenKind::Print),
                "super" => Some(TokenKind::Super),
                "while" => Some(TokenKind::While),
                _ => None,
            },
            6 => match text {
                "return" => Some(TokenKind::Return),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Classify an identifier-shaped lexeme.
///
/// Returns the keyword kind on an exact match, [`TokenKind::Identifier`]
/// otherwise.
#[inline]
pub fn classify(lexeme: &str) -> TokenKind {
    TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier)
}
