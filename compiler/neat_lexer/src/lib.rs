//! Document lexing for `ConfigNeat`.
//!
//! Drives the [`neat_lexer_core`] tokenizer over whole documents:
//!
//! - [`lex`] / [`lex_with_config`]: one-shot lexing into per-line tokens
//!   plus positioned [`LexError`]s.
//! - [`Highlighter`]: keeps a state snapshot before every line and
//!   re-lexes only what an edit can affect.
//! - [`lex_line`]: the per-line driver both of them share, for hosts that
//!   manage their own state.

mod config;
mod highlighter;
mod lex_error;
mod lines;
mod span;
mod token;

pub use config::{parse_error_policy, FlagOutcome, LexerConfig};
pub use highlighter::{EditError, HighlightedLine, Highlighter};
pub use lex_error::{LexError, LexErrorKind};
pub use lines::{has_line_break, split_lines, Line, Lines};
pub use span::Span;
pub use token::Token;

pub use neat_lexer_core::{ErrorPolicy, LexerState, LineStream, OpenConstructs, Tag};

use token::push_coalesced;

/// Tokens and errors of one line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lex one line, advancing `state` to the start of the next line.
///
/// `line_index` is only used to position errors.
pub fn lex_line(
    text: &str,
    line_index: u32,
    state: &mut LexerState,
    config: &LexerConfig,
) -> LineOutput {
    let mut output = LineOutput::default();
    let mut stream = LineStream::new(text);
    while !stream.eol() {
        stream.start_token();
        let tag = match neat_lexer_core::step(&mut stream, state) {
            Ok(tag) => tag,
            Err(err) => {
                tracing::debug!(
                    line = line_index,
                    offset = err.offset,
                    column = err.column,
                    policy = ?state.policy(),
                    "unbalanced close brace"
                );
                output.errors.push(LexError::unbalanced_close_brace(
                    line_index,
                    err,
                    state.policy(),
                ));
                Tag::Error
            }
        };
        let token = Token::new(tag, Span::new(stream.start(), stream.pos()));
        if config.coalesce {
            push_coalesced(&mut output.tokens, token);
        } else {
            output.tokens.push(token);
        }
    }
    output
}

/// One lexed line of a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexedLine {
    /// Byte offset of the line in the document.
    pub offset: usize,
    pub tokens: Vec<Token>,
}

/// Result of lexing a whole document.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub lines: Vec<LexedLine>,
    /// Errors in document order.
    pub errors: Vec<LexError>,
    /// State after the last line.
    pub end_state: LexerState,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Convert a line-relative span into a document byte span.
    pub fn absolute_span(&self, line: u32, span: Span) -> Option<Span> {
        let offset = self.lines.get(line as usize)?.offset;
        let offset = u32::try_from(offset).ok()?;
        Some(span.offset_by(offset))
    }

    /// Every token with its zero-based line index.
    pub fn tokens(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| line.tokens.iter().map(move |token| (index, token)))
    }
}

/// Lex a document with the default configuration.
pub fn lex(source: &str) -> LexOutput {
    lex_with_config(source, &LexerConfig::default())
}

/// Lex a document.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex_with_config(source: &str, config: &LexerConfig) -> LexOutput {
    let mut state = LexerState::with_policy(config.error_policy);
    let mut lines = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in split_lines(source).enumerate() {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let output = lex_line(line.text, index, &mut state, config);
        errors.extend(output.errors);
        lines.push(LexedLine {
            offset: line.offset,
            tokens: output.tokens,
        });
    }

    tracing::debug!(
        lines = lines.len(),
        errors = errors.len(),
        depth = state.depth(),
        "document lexed"
    );

    LexOutput {
        lines,
        errors,
        end_state: state,
    }
}
