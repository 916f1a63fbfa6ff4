//! Parse position over an input buffer.
//!
//! A `Cursor` is the whole of the parser's state: the input and a byte
//! offset. Sub-parsers take it by `&mut` and leave it pointing at the next
//! significant token.

use crate::error::{FormatError, ParseErrorCode};

/// Whitespace is exactly tab, newline and space. Carriage return is not.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b' ')
}

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte under the cursor.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Unconsumed input as bytes.
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    /// Input text between `start` and the cursor.
    ///
    /// Both offsets must sit on ASCII bytes or the ends of the input, which
    /// keeps them on char boundaries.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Move forward `n` bytes.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consume `byte` if it is under the cursor.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `byte` or fail with `code` at the current offset.
    pub(crate) fn expect(&mut self, byte: u8, code: ParseErrorCode) -> Result<(), FormatError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(code))
        }
    }

    /// Skip tab, newline and space.
    pub(crate) fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|&&b| is_whitespace(b))
            .count();
        self.pos += skipped;
    }

    #[inline]
    pub(crate) fn error(&self, code: ParseErrorCode) -> FormatError {
        FormatError::new(code, self.pos)
    }
}
