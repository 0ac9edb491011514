//! Lexer state carried between tokenizer calls and across lines.

use crate::block::{BlockContext, BlockStack};

/// What happens after a `}` with no open block to close.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorPolicy {
    /// The state becomes permanently errored: every later token in the
    /// document is [`Tag::Error`](crate::Tag::Error).
    #[default]
    Sticky,
    /// The offending `}` is reported and lexing continues after it at the
    /// root block.
    Resync,
}

/// Complete tokenizer state for one document.
///
/// Cloning is the snapshot mechanism: a clone taken at a line boundary,
/// resumed on the same lines, reproduces the same tags as lexing from the
/// start. Instances must not be shared between documents.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerState {
    pub(crate) blocks: BlockStack,
    pub(crate) errored: bool,
    pub(crate) policy: ErrorPolicy,
}

/// Multi-line constructs still open in the innermost block.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct OpenConstructs {
    /// Blocks opened with `{` and not yet closed (root excluded).
    pub unclosed_blocks: usize,
    pub raw_string: bool,
    pub block_comment: bool,
    pub placeholder: bool,
}

impl OpenConstructs {
    /// Returns `true` when nothing is left open.
    pub fn is_empty(&self) -> bool {
        self.unclosed_blocks == 0 && !self.raw_string && !self.block_comment && !self.placeholder
    }
}

impl LexerState {
    /// Start-of-document state with the [`Sticky`](ErrorPolicy::Sticky) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start-of-document state with the given error policy.
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Returns `true` once a sticky error has been raised.
    #[inline]
    pub fn is_errored(&self) -> bool {
        self.errored
    }

    /// Number of open blocks, including the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.blocks.depth()
    }

    /// Context of the innermost open block.
    #[inline]
    pub fn top(&self) -> &BlockContext {
        self.blocks.top()
    }

    #[inline]
    pub fn blocks(&self) -> &BlockStack {
        &self.blocks
    }

    /// Summary of what the document leaves unterminated if it ends here.
    pub fn open_constructs(&self) -> OpenConstructs {
        let top = self.top();
        OpenConstructs {
            unclosed_blocks: self.depth() - 1,
            raw_string: top.in_raw_string(),
            block_comment: top.in_block_comment(),
            placeholder: top.in_placeholder(),
        }
    }
}
