//! Character stream over a single line of text.
//!
//! The tokenizer is driven one line at a time: the host builds a
//! [`LineStream`] for each line, calls [`next_token`](crate::next_token)
//! until [`eol()`](LineStream::eol), and carries the
//! [`LexerState`](crate::LexerState) over to the next line.
//!
//! Positions are byte offsets into the line. Every movement is by whole
//! UTF-8 characters, so positions always fall on character boundaries.
//! Alongside the byte position the stream tracks a column in UTF-16 code
//! units, the unit editors count columns in. Byte positions slice the
//! line; columns are what gets compared across lines.

/// Cursor over one line of text (without its line terminator).
///
/// The stream is [`Copy`], so a host can snapshot it before a token and
/// restore it for re-highlighting without re-reading the line.
#[derive(Clone, Copy, Debug)]
pub struct LineStream<'a> {
    line: &'a str,
    /// Current read position (byte offset into `line`).
    pos: u32,
    /// Start of the token being scanned.
    start: u32,
    /// Column of `pos` in UTF-16 code units.
    column: u32,
}

/// Size assertion: `&str` = 16, 3 * u32 = 12 => 32 bytes on 64-bit.
const _: () = assert!(std::mem::size_of::<LineStream<'static>>() <= 32);

impl<'a> LineStream<'a> {
    /// Create a stream positioned at the start of `line`.
    ///
    /// Lines longer than `u32::MAX` bytes are truncated to `u32::MAX` bytes;
    /// the host's line splitter never produces such lines in practice.
    pub fn new(line: &'a str) -> Self {
        let line = if u32::try_from(line.len()).is_ok() {
            line
        } else {
            let mut end = u32::MAX as usize;
            while !line.is_char_boundary(end) {
                end -= 1;
            }
            &line[..end]
        };
        Self {
            line,
            pos: 0,
            start: 0,
            column: 0,
        }
    }

    /// The full line this stream reads from.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Column of the current position, in UTF-16 code units.
    ///
    /// Equal to [`pos`](Self::pos) on ASCII lines.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset where the current token started.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Mark the current position as the start of a new token.
    #[inline]
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// Returns `true` when nothing has been consumed on this line yet.
    #[inline]
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// Returns `true` when the whole line has been consumed.
    #[inline]
    pub fn eol(&self) -> bool {
        self.pos as usize >= self.line.len()
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos as usize..]
    }

    /// Text of the current token (`start..pos`).
    #[inline]
    pub fn current(&self) -> &'a str {
        &self.line[self.start as usize..self.pos as usize]
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    #[allow(
        clippy::should_implement_trait,
        reason = "mirrors the host stream contract; not a general iterator"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.advance(ch);
        Some(ch)
    }

    /// Consume the next character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected);
            true
        } else {
            false
        }
    }

    /// Move back over the previously consumed character.
    ///
    /// Does nothing at the start of the line.
    #[inline]
    pub fn back_up(&mut self) {
        if let Some(ch) = self.line[..self.pos as usize].chars().next_back() {
            self.retreat(ch);
        }
    }

    /// Run `matcher` on the remainder of the line without consuming.
    ///
    /// `matcher` returns the byte length it recognized at the start of the
    /// text it is given. Lengths that do not land on a character boundary
    /// are treated as no match.
    pub fn match_ahead(&self, matcher: impl FnOnce(&str) -> Option<usize>) -> Option<usize> {
        let rest = self.rest();
        matcher(rest).filter(|&len| len <= rest.len() && rest.is_char_boundary(len))
    }

    /// Run `matcher` on the remainder of the line and consume what it
    /// recognized.
    pub fn eat_match(&mut self, matcher: impl FnOnce(&str) -> Option<usize>) -> Option<usize> {
        let len = self.match_ahead(matcher)?;
        for ch in self.rest()[..len].chars() {
            self.advance(ch);
        }
        Some(len)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "UTF-8 and UTF-16 lengths are at most 4; the line fits in u32 (checked in new)"
    )]
    #[inline]
    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8() as u32;
        self.column += ch.len_utf16() as u32;
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "UTF-8 and UTF-16 lengths are at most 4"
    )]
    #[inline]
    fn retreat(&mut self, ch: char) {
        self.pos -= ch.len_utf8() as u32;
        self.column -= ch.len_utf16() as u32;
    }
}
