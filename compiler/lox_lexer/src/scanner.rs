//! Single-pass scanner.
//!
//! The main loop marks the start of a token, consumes its first rune and
//! dispatches on it. Every arm consumes at least that one rune, so the loop
//! always makes progress and terminates in time linear in the input.

use lox_diagnostic::DiagnosticSink;
use lox_ir::{classify, Token, TokenKind, TokenList, TokenLiteral};
use lox_lexer_core::{is_alpha, is_alphanumeric, is_digit, Cursor};
use tracing::{debug, trace};

use crate::{LexError, LexErrorKind};

/// Converts one source string into tokens.
///
/// A scanner is consumed by [`scan_tokens`](Self::scan_tokens); scanning a
/// second input needs a second scanner.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where the token being scanned begins.
    start: usize,
    /// Line of the rune at the cursor.
    line: u32,
    /// Line the token being scanned began on.
    start_line: u32,
    tokens: TokenList,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            start_line: 1,
            // rough guess: one token per five bytes of source
            tokens: TokenList::with_capacity(source.len() / 5 + 1),
            sink,
        }
    }

    /// Scan the whole source.
    ///
    /// The returned list always ends in exactly one `Eof` token carrying the
    /// line the scan ended on.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn scan_tokens(mut self) -> TokenList {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        debug!(tokens = self.tokens.len(), lines = self.line, "scan complete");
        self.tokens
    }

    fn scan_token(&mut self) {
        match self.cursor.advance() {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.eat_until_newline_or_eof();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    /// Two-rune operator if `second` follows, else the one-rune form.
    fn add_either(&mut self, second: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(second) {
            matched
        } else {
            single
        };
        self.add_token(kind);
    }

    /// String literal; the opening quote is already consumed.
    ///
    /// A backslash escapes the rune after it, so `\"` does not close the
    /// string. Only one level is tracked: each backslash flips the escape
    /// state and any other rune clears it. Content is stored undecoded.
    fn string(&mut self) {
        let mut escaped = false;
        loop {
            if self.cursor.is_eof() {
                self.error(LexErrorKind::UnterminatedString);
                return;
            }
            let c = self.cursor.current();
            if c == '"' && !escaped {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            escaped = c == '\\' && !escaped;
            self.cursor.advance();
        }

        // closing quote
        self.cursor.advance();

        let end = self.cursor.pos() - 1;
        let value = self.cursor.slice(self.start + 1, end).to_owned();
        self.add_literal(TokenKind::String, TokenLiteral::Str(value));
    }

    /// Number literal: digits, then an optional fraction.
    ///
    /// The `.` only belongs to the number when a digit follows it, so `1.`
    /// scans as `1` then `.`.
    fn number(&mut self) {
        self.cursor.eat_while(is_digit);
        if self.cursor.current() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let lexeme = self.cursor.slice_from(self.start);
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, TokenLiteral::Number(value)),
            Err(err) => self.error(LexErrorKind::MalformedNumber {
                lexeme: lexeme.to_owned(),
                reason: err.to_string(),
            }),
        }
    }

    fn identifier(&mut self) {
        self.cursor.eat_while(is_alphanumeric);
        let kind = classify(self.cursor.slice_from(self.start));
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: TokenLiteral) {
        self.push(kind, Some(literal));
    }

    fn push(&mut self, kind: TokenKind, literal: Option<TokenLiteral>) {
        let lexeme = self.cursor.slice_from(self.start);
        trace!(?kind, lexeme, line = self.start_line, "token");
        self.tokens.push(Token::new(kind, lexeme, literal, self.start_line));
    }

    fn error(&mut self, kind: LexErrorKind) {
        let err = LexError::new(self.line, kind);
        debug!(%err, "lexical error");
        self.sink.report(err.into_diagnostic());
    }
}
