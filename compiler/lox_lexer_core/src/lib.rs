//! Low-level source navigation for the Lox scanner.
//!
//! [`Cursor`] walks a `&str` one rune at a time and offers the three
//! lookahead primitives the scanner is built from: `current` (peek),
//! `peek_next`, and `eat` (conditional advance). Lookahead is a pure read
//! at the cursor's byte offset; nothing is consumed and nothing has to be
//! rewound when a probe does not match.
//!
//! This crate has no `lox_*` dependencies, so tools that only need to walk
//! source text can use it without pulling in the front end.

mod char_class;
mod cursor;

pub use char_class::{is_alpha, is_alphanumeric, is_digit};
pub use cursor::Cursor;
