//! Splitting documents into lines.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very
//! end of the document is followed by one final empty line, so `"a\n"` has
//! two lines and the empty document has one.

/// One line of a document, without its terminator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Line<'a> {
    pub text: &'a str,
    /// Byte offset of the line's first character in the document.
    pub offset: usize,
}

/// Iterator over the lines of a document.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    source: &'a str,
    pos: usize,
    done: bool,
}

/// Split `source` into lines.
pub fn split_lines(source: &str) -> Lines<'_> {
    Lines {
        source,
        pos: 0,
        done: false,
    }
}

/// Returns `true` if `text` contains a line terminator.
pub fn has_line_break(text: &str) -> bool {
    memchr::memchr2(b'\n', b'\r', text.as_bytes()).is_some()
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.done {
            return None;
        }
        let start = self.pos;
        let remaining = &self.source.as_bytes()[start..];
        let Some(found) = memchr::memchr2(b'\n', b'\r', remaining) else {
            self.done = true;
            return Some(Line {
                text: &self.source[start..],
                offset: start,
            });
        };

        let end = start + found;
        let terminator = if remaining[found] == b'\r' && remaining.get(found + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        self.pos = end + terminator;
        Some(Line {
            text: &self.source[start..end],
            offset: start,
        })
    }
}
