//! Token classifications produced by the tokenizer.
//!
//! One [`Tag`] is returned per call to [`next_token`](crate::next_token).
//! Tags carry no text or position; the host pairs each tag with the
//! stream range consumed by the call.

use std::fmt;

/// Classification of the character(s) consumed by one tokenizer step.
///
/// `#[repr(u8)]` keeps the tag at one byte so hosts can store a tag per
/// token cheaply. Discriminants are grouped:
///
/// - `0`: structural fault
/// - `1..=4`: opaque spans (escapes, placeholders, raw strings, comments)
/// - `5`: block brackets
/// - `6..=10`: keys
/// - `11..=12`: values
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Unbalanced structure; everything after a sticky error is also `Error`.
    Error = 0,
    /// `` \` ``: a literal backtick that does not toggle raw-string mode.
    EscapedBacktick = 1,
    /// `%` delimiters and everything between them.
    Placeholder = 2,
    /// Backtick delimiters and everything between them.
    RawString = 3,
    /// `#` line comments and `/* */` block comments.
    Comment = 4,
    /// `{` or `}` opening or closing a block.
    Bracket = 5,
    /// Key starting with `:`.
    KeyLabel = 6,
    /// Key starting with `@`.
    KeyInherit = 7,
    /// Key starting with `+`.
    KeyMerge = 8,
    /// Key starting with `-`.
    KeyDelete = 9,
    /// Any other key.
    Keyword = 10,
    /// A boolean literal value (`yes`, `off`, `1`, ...).
    Builtin = 11,
    /// Generic value content.
    Variable = 12,
}

impl Tag {
    /// Presentation style name understood by editor themes.
    pub const fn style(self) -> &'static str {
        match self {
            Tag::Error => "error",
            Tag::EscapedBacktick => "string-2",
            Tag::Placeholder => "placeholder",
            Tag::RawString => "quote",
            Tag::Comment => "comment",
            Tag::Bracket => "bracket",
            Tag::KeyLabel => "key-label",
            Tag::KeyInherit => "key-inherit",
            Tag::KeyMerge => "key-merge",
            Tag::KeyDelete => "key-delete",
            Tag::Keyword => "keyword",
            Tag::Builtin => "builtin",
            Tag::Variable => "variable",
        }
    }

    /// Returns `true` for the five key classifications.
    pub const fn is_key(self) -> bool {
        matches!(
            self,
            Tag::KeyLabel | Tag::KeyInherit | Tag::KeyMerge | Tag::KeyDelete | Tag::Keyword
        )
    }

    /// Key classification for a key whose first character is `lead`.
    pub const fn for_key_lead(lead: Option<char>) -> Tag {
        match lead {
            Some(':') => Tag::KeyLabel,
            Some('@') => Tag::KeyInherit,
            Some('+') => Tag::KeyMerge,
            Some('-') => Tag::KeyDelete,
            _ => Tag::Keyword,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests;
