//! Lexical error types.
//!
//! The scanner builds a [`LexError`] for each problem and converts it to a
//! [`Diagnostic`] before handing it to the sink. The `Display` text of
//! [`LexErrorKind`] is the diagnostic message.

use lox_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// A lexer error: where it happened and what went wrong.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("[line {line}] {kind}")]
pub struct LexError {
    pub line: u32,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LexErrorKind {
    /// A rune that starts no token.
    #[error("Unexpected character '{}'.", .0.escape_debug())]
    UnexpectedCharacter(char),
    /// End of input inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A scanned number lexeme that does not decode as a float.
    #[error("Malformed number '{lexeme}': {reason}")]
    MalformedNumber { lexeme: String, reason: String },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::MalformedNumber { .. } => ErrorCode::E0003,
        }
    }
}

impl LexError {
    pub fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.line, self.kind.to_string())
    }
}
