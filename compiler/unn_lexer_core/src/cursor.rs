//! Bounds-checked cursor over an immutable source string.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! of the source return the [`EOF`] sentinel (`0x00`) instead of indexing
//! out of bounds, so lookahead is safe at any position.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`.
//! A null at `pos < source_len` is an ordinary (unknown) character;
//! only `pos >= source_len` is EOF.

/// Sentinel byte returned by reads at or past the end of the source.
pub const EOF: u8 = 0x00;

/// Cursor over the bytes of a source string.
///
/// The cursor is [`Copy`], so callers can snapshot a position cheaply.
///
/// # Invariant
///
/// `pos` only grows, and every position the cursor stops at through its
/// public API is a UTF-8 character boundary of `text`: single-byte advances
/// are only taken over ASCII bytes, and [`advance_char`](Self::advance_char)
/// skips whole characters.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: u32,
    /// Length of the source in bytes, saturated at `u32::MAX`.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// Sources larger than `u32::MAX` bytes are accepted, but scanning stops
    /// at `u32::MAX`. Front ends reject oversized files before lexing.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            source_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the byte at the current position, or [`EOF`] past the end.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of current.
    ///
    /// Safe to call with any offset: out-of-range reads return [`EOF`].
    #[inline]
    pub fn peek(&self, offset: u32) -> u8 {
        let Some(index) = self.pos.checked_add(offset) else {
            return EOF;
        };
        if index >= self.source_len {
            return EOF;
        }
        self.text.as_bytes()[index as usize]
    }

    /// Returns the character starting at the current position.
    ///
    /// `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.text[self.pos as usize..].chars().next()
    }

    /// Advance the cursor by one byte.
    ///
    /// Never moves past the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on character boundaries.
    /// Positions previously returned by [`pos()`](Self::pos) always do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    /// Returns the byte found, or [`EOF`] when neither occurs again.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            EOF
        }
    }

    /// Advance to the start of the next `*/` pair.
    ///
    /// Returns `true` with the cursor on the `*` if the pair was found.
    /// Otherwise positions the cursor at EOF and returns `false`. The pair
    /// itself is never consumed here.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_block_comment_end(&mut self) -> bool {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memmem::find(remaining, b"*/") {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Unconsumed source bytes.
    fn remaining(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.pos as usize..self.source_len as usize]
    }
}
