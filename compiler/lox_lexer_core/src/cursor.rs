//! Rune cursor over a source string.
//!
//! The cursor holds a byte offset that always sits on a `char` boundary.
//! Reads past the end return the sentinel `'\0'`. Source text may also
//! contain a real U+0000; [`Cursor::is_eof`] tells the two apart by
//! comparing the offset against the source length.

/// Cursor over a source string.
///
/// [`Copy`], so a snapshot for backtracking is a plain assignment.
///
/// # Invariant
///
/// `pos <= source.len()` and `source.is_char_boundary(pos)`. Every method
/// that moves the cursor moves it by whole runes.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The rune at the cursor, without consuming it.
    ///
    /// Returns `'\0'` at EOF. Interior null runes also return `'\0'`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// The rune one past the cursor, without consuming anything.
    ///
    /// Returns `'\0'` when fewer than two runes remain.
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consume and return the rune at the cursor.
    ///
    /// At EOF this returns `'\0'` and leaves the cursor where it is.
    #[inline]
    pub fn advance(&mut self) -> char {
        match self.rest().chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    /// Consume the rune at the cursor only if it equals `expected`.
    ///
    /// A failed match leaves the cursor untouched.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.is_eof() || self.current() != expected {
            return false;
        }
        self.pos += expected.len_utf8();
        true
    }

    /// Advance while `pred` holds for the current rune.
    ///
    /// Stops at EOF regardless of `pred('\0')`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance to the next `\n` (not consuming it) or to EOF.
    ///
    /// Used by the comment scanner to skip comment bodies.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Returns `true` once every rune has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on `char` boundaries.
    /// Offsets taken from [`pos()`](Self::pos) always are.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
