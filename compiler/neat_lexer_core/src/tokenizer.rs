//! The tokenizer: one fixed-priority rule cascade per call.
//!
//! Each call consumes one character (two for an escaped backtick or a
//! `*/`, a whole literal for booleans) and classifies it using the
//! innermost block's context. The order of the rules is load-bearing:
//! placeholders shadow raw strings, raw strings shadow comments, comments
//! shadow brackets, and brackets shadow key/value tracking.

use crate::block::{BlockContext, ContextFlags, RootBlockPop};
use crate::literal::match_boolean;
use crate::state::{ErrorPolicy, LexerState};
use crate::stream::LineStream;
use crate::tag::Tag;

/// A `}` was read while only the root block was open.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("unbalanced `}}` at column {column}: no open block to close")]
pub struct UnbalancedCloseBrace {
    /// Byte offset of the `}` in its line.
    pub offset: u32,
    /// Column of the `}` in UTF-16 code units.
    pub column: u32,
}

/// Start-of-document state: one root block, sticky error policy.
pub fn initial_state() -> LexerState {
    LexerState::new()
}

/// Advance `stream` by one token and classify it.
///
/// An unbalanced `}` is reported as [`Tag::Error`]; use [`step`] to observe
/// the error itself. Callers stop at [`LineStream::eol`].
///
/// # Panics
///
/// In debug builds, when called at end of line.
pub fn next_token(stream: &mut LineStream<'_>, state: &mut LexerState) -> Tag {
    step(stream, state).unwrap_or(Tag::Error)
}

/// Advance `stream` by one token, surfacing an unbalanced `}` as an error.
///
/// The `Err` is returned for the `}` itself, which has been consumed.
/// Under [`ErrorPolicy::Sticky`] every later call returns `Ok(Tag::Error)`;
/// under [`ErrorPolicy::Resync`] lexing continues normally.
///
/// Must not be called at end of line: debug builds panic, release builds
/// consume nothing and return [`Tag::Variable`].
pub fn step(
    stream: &mut LineStream<'_>,
    state: &mut LexerState,
) -> Result<Tag, UnbalancedCloseBrace> {
    debug_assert!(!stream.eol(), "tokenizer called at end of line");
    let sol = stream.sol();
    let offset = stream.pos();
    let column = stream.column();
    let Some(ch) = stream.next() else {
        return Ok(Tag::Variable);
    };

    let block = state.blocks.top_mut();
    if sol {
        block.begin_line();
    }

    if state.errored {
        return Ok(Tag::Error);
    }

    if let Some(tag) = scan_opaque(ch, stream, block) {
        return Ok(tag);
    }

    match ch {
        '{' => {
            state.blocks.push();
            Ok(Tag::Bracket)
        }
        '}' => match state.blocks.pop() {
            Ok(_) => Ok(Tag::Bracket),
            Err(RootBlockPop) => {
                if state.policy == ErrorPolicy::Sticky {
                    state.errored = true;
                }
                Err(UnbalancedCloseBrace { offset, column })
            }
        },
        _ => Ok(classify(ch, stream, state.blocks.top_mut())),
    }
}

/// Escapes, placeholders, raw strings and comments.
///
/// Returns `None` when `ch` is ordinary text outside all of them.
fn scan_opaque(ch: char, stream: &mut LineStream<'_>, block: &mut BlockContext) -> Option<Tag> {
    let in_comment = block.in_comment();

    if ch == '\\' && !in_comment && stream.eat('`') {
        return Some(Tag::EscapedBacktick);
    }

    if ch == '%' && !in_comment {
        block.toggle(ContextFlags::IN_PLACEHOLDER);
        return Some(Tag::Placeholder);
    }
    if block.in_placeholder() {
        return Some(Tag::Placeholder);
    }

    if ch == '`' && !in_comment {
        block.toggle(ContextFlags::IN_RAW_STRING);
        return Some(Tag::RawString);
    }
    if block.in_raw_string() {
        return Some(Tag::RawString);
    }

    if ch == '#' && !block.in_block_comment() && (block.prev_was_space() || block.at_line_start())
    {
        block.set(ContextFlags::IN_LINE_COMMENT, true);
        return Some(Tag::Comment);
    }
    if block.in_line_comment() {
        return Some(Tag::Comment);
    }

    // The `*` of `/*` is consumed by the next call, inside the comment.
    if ch == '/' && stream.peek() == Some('*') {
        block.set(ContextFlags::IN_BLOCK_COMMENT, true);
        return Some(Tag::Comment);
    }
    if ch == '*' && block.in_block_comment() && stream.eat('/') {
        block.set(ContextFlags::IN_BLOCK_COMMENT, false);
        return Some(Tag::Comment);
    }
    if block.in_block_comment() {
        return Some(Tag::Comment);
    }

    None
}

/// Key/value tracking for plain text.
fn classify(ch: char, stream: &mut LineStream<'_>, block: &mut BlockContext) -> Tag {
    let is_space = ch == ' ';

    // A space after the line's first token ends the key.
    if is_space && !block.at_line_start() {
        block.key_lead = None;
        block.set(ContextFlags::SCANNING_KEY, false);
    }
    block.set(ContextFlags::PREV_WAS_SPACE, is_space);

    // The value start carries over from earlier lines: a line whose first
    // character is at or past the previous value's column continues it.
    let before_value = match block.value_start {
        None => true,
        Some(start) => stream.column() + 1 < start,
    };
    if !is_space && block.at_line_start() && before_value {
        block.set(ContextFlags::SCANNING_KEY, true);
        block.set(ContextFlags::AT_LINE_START, false);
        block.value_start = None;
        block.key_lead = Some(ch);
    }

    if !is_space && !block.scanning_key() && block.value_start.is_none() {
        stream.back_up();
        if stream.eat_match(match_boolean).is_some() {
            return Tag::Builtin;
        }
        stream.next();
        block.value_start = Some(stream.column());
    }

    if block.scanning_key() {
        Tag::for_key_lead(block.key_lead)
    } else {
        Tag::Variable
    }
}
