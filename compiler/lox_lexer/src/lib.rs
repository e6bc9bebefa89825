//! Scanner for Lox.
//!
//! Turns source text into a [`TokenList`] in one pass. Lexical errors go to
//! a [`DiagnosticSink`] and scanning carries on, so the result always ends
//! in exactly one `Eof` token, even for garbage input.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! let tokens = lox_lexer::scan("var x = 1;", &mut queue);
//! assert!(!queue.had_error());
//! ```

mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use lox_diagnostic::DiagnosticSink;
use lox_ir::TokenList;

/// Scan `source` into tokens, reporting lexical errors to `sink`.
pub fn scan(source: &str, sink: &mut dyn DiagnosticSink) -> TokenList {
    Scanner::new(source, sink).scan_tokens()
}
