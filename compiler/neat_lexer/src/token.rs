//! Classified tokens.

use neat_lexer_core::Tag;

use crate::Span;

/// A classified range of one line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub tag: Tag,
    /// Byte range within the line.
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(tag: Tag, span: Span) -> Self {
        Token { tag, span }
    }

    /// The token's text, given the line it came from.
    pub fn text<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.span.to_range())
    }
}

/// Append `token` to `tokens`, merging it into the last token when both
/// have the same tag and touch.
pub(crate) fn push_coalesced(tokens: &mut Vec<Token>, token: Token) {
    match tokens.last_mut() {
        Some(last) if last.tag == token.tag && last.span.end == token.span.start => {
            last.span = last.span.extend_to(token.span.end);
        }
        _ => tokens.push(token),
    }
}
