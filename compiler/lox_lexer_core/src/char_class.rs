//! Character classes used by the scanner.
//!
//! ASCII only: a non-ASCII letter is neither alpha nor digit and ends up as
//! an unexpected character.

/// `a-z`, `A-Z`, or `_`.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
