//! Per-block lexical contexts and the stack that nests them.
//!
//! Every `{` opens a block with its own [`BlockContext`]; lexical rules
//! (key vs. value, raw strings, comments, placeholders) only ever consult
//! the innermost one. The stack is never empty: the root context lives
//! outside the growable part, so "close the root" is a reportable
//! condition rather than an out-of-bounds access.

use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Boolean lexing flags of one block.
    ///
    /// The comment, raw-string and placeholder flags are mutually exclusive
    /// in practice: the rule order in the tokenizer never sets one while
    /// another is active.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct ContextFlags: u8 {
        /// Characters being consumed belong to a key token.
        const SCANNING_KEY = 1 << 0;
        /// No non-space character has been consumed on this line yet.
        const AT_LINE_START = 1 << 1;
        /// Inside a backtick-delimited raw string.
        const IN_RAW_STRING = 1 << 2;
        /// Inside a `%`-delimited placeholder.
        const IN_PLACEHOLDER = 1 << 3;
        /// Inside a `#` comment (until end of line).
        const IN_LINE_COMMENT = 1 << 4;
        /// Inside a `/* */` comment.
        const IN_BLOCK_COMMENT = 1 << 5;
        /// The previous character was a plain space.
        const PREV_WAS_SPACE = 1 << 6;
    }
}

/// Lexical context of one open block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockContext {
    pub(crate) flags: ContextFlags,
    /// First character of the key being scanned.
    pub(crate) key_lead: Option<char>,
    /// Column (UTF-16 code units) just after the first character of the
    /// current value. Survives line breaks; cleared when a key starts.
    pub(crate) value_start: Option<u32>,
}

impl BlockContext {
    /// A freshly opened block: key-scanning mode at the start of a line.
    pub const fn new() -> Self {
        Self {
            flags: ContextFlags::SCANNING_KEY.union(ContextFlags::AT_LINE_START),
            key_lead: None,
            value_start: None,
        }
    }

    #[inline]
    pub fn flags(&self) -> ContextFlags {
        self.flags
    }

    #[inline]
    pub fn scanning_key(&self) -> bool {
        self.flags.contains(ContextFlags::SCANNING_KEY)
    }

    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.flags.contains(ContextFlags::AT_LINE_START)
    }

    #[inline]
    pub fn in_raw_string(&self) -> bool {
        self.flags.contains(ContextFlags::IN_RAW_STRING)
    }

    #[inline]
    pub fn in_placeholder(&self) -> bool {
        self.flags.contains(ContextFlags::IN_PLACEHOLDER)
    }

    #[inline]
    pub fn in_line_comment(&self) -> bool {
        self.flags.contains(ContextFlags::IN_LINE_COMMENT)
    }

    #[inline]
    pub fn in_block_comment(&self) -> bool {
        self.flags.contains(ContextFlags::IN_BLOCK_COMMENT)
    }

    /// Inside either kind of comment.
    #[inline]
    pub fn in_comment(&self) -> bool {
        self.flags
            .intersects(ContextFlags::IN_LINE_COMMENT | ContextFlags::IN_BLOCK_COMMENT)
    }

    #[inline]
    pub fn prev_was_space(&self) -> bool {
        self.flags.contains(ContextFlags::PREV_WAS_SPACE)
    }

    #[inline]
    pub fn key_lead(&self) -> Option<char> {
        self.key_lead
    }

    #[inline]
    pub fn value_start(&self) -> Option<u32> {
        self.value_start
    }

    /// Reset per-line state when the first character of a line is read.
    ///
    /// Line comments end with their line; raw strings, block comments and
    /// placeholders carry over.
    #[inline]
    pub(crate) fn begin_line(&mut self) {
        self.flags.insert(ContextFlags::AT_LINE_START);
        self.flags.remove(ContextFlags::IN_LINE_COMMENT);
    }

    #[inline]
    pub(crate) fn set(&mut self, flag: ContextFlags, value: bool) {
        self.flags.set(flag, value);
    }

    #[inline]
    pub(crate) fn toggle(&mut self, flag: ContextFlags) {
        self.flags.toggle(flag);
    }
}

impl Default for BlockContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Attempt to pop the root block off a [`BlockStack`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("cannot close the root block")]
pub struct RootBlockPop;

/// Stack of open blocks, innermost last. Depth is always at least 1.
///
/// Nesting in configuration files is shallow, so the nested part lives
/// inline for the first few levels.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStack {
    root: BlockContext,
    nested: SmallVec<[BlockContext; 4]>,
}

impl BlockStack {
    /// A stack holding only a fresh root block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open blocks, including the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Open a new block.
    #[inline]
    pub fn push(&mut self) {
        self.nested.push(BlockContext::new());
    }

    /// Close the innermost block, returning its final context.
    ///
    /// The root block cannot be closed.
    #[inline]
    pub fn pop(&mut self) -> Result<BlockContext, RootBlockPop> {
        self.nested.pop().ok_or(RootBlockPop)
    }

    /// The innermost open block.
    #[inline]
    pub fn top(&self) -> &BlockContext {
        self.nested.last().unwrap_or(&self.root)
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut BlockContext {
        match self.nested.last_mut() {
            Some(block) => block,
            None => &mut self.root,
        }
    }

}
