//! Incremental re-lexing of an edited document.
//!
//! The highlighter stores the [`LexerState`] in force before every line.
//! An edit re-lexes from the snapshot in front of the first changed line
//! and keeps going only until the state entering an unchanged line equals
//! the snapshot already stored for it: from there on, every later line
//! would lex exactly as before.

use std::ops::Range;

use crate::{
    has_line_break, lex_line, split_lines, LexError, LexerConfig, LexerState, OpenConstructs,
    Token,
};

/// Invalid edit; the document is left untouched.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("line range {start}..{end} is invalid for a document of {len} lines")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("replacement line {index} contains a line terminator")]
    EmbeddedLineBreak { index: usize },
}

/// A line with its tokens and the state it was lexed from.
#[derive(Clone, Debug)]
pub struct HighlightedLine {
    text: String,
    state_before: LexerState,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl HighlightedLine {
    fn pending(text: &str) -> Self {
        HighlightedLine {
            text: text.to_owned(),
            state_before: LexerState::default(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens of this line, spans relative to the line.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// The state the line was lexed from.
    pub fn state_before(&self) -> &LexerState {
        &self.state_before
    }
}

/// Lexed document that supports line-level edits.
///
/// A document always has at least one line; removing every line leaves a
/// single empty one.
#[derive(Clone, Debug)]
pub struct Highlighter {
    config: LexerConfig,
    lines: Vec<HighlightedLine>,
    end_state: LexerState,
}

impl Highlighter {
    /// An empty document.
    pub fn new(config: LexerConfig) -> Self {
        Self::from_text("", config)
    }

    pub fn from_text(source: &str, config: LexerConfig) -> Self {
        let mut highlighter = Highlighter {
            config,
            lines: Vec::new(),
            end_state: LexerState::with_policy(config.error_policy),
        };
        highlighter.set_text(source);
        highlighter
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Replace the whole document.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn set_text(&mut self, source: &str) {
        self.lines = split_lines(source)
            .map(|line| HighlightedLine::pending(line.text))
            .collect();
        let initial = LexerState::with_policy(self.config.error_policy);
        let relexed = self.relex(0, self.lines.len(), initial);
        tracing::debug!(lines = relexed.len(), "document relexed");
    }

    /// Replace the lines in `range` with `replacement`.
    ///
    /// Returns the range of lines (in the edited document) that were
    /// re-lexed: the replacement itself plus any following lines whose
    /// incoming state changed.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = range.start, end = range.end, inserted = replacement.len())
    )]
    pub fn replace_lines(
        &mut self,
        range: Range<usize>,
        replacement: &[&str],
    ) -> Result<Range<usize>, EditError> {
        if range.start > range.end || range.end > self.lines.len() {
            return Err(EditError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.lines.len(),
            });
        }
        if let Some(index) = replacement.iter().position(|line| has_line_break(line)) {
            return Err(EditError::EmbeddedLineBreak { index });
        }

        let entry_state = self.state_before(range.start).clone();
        let removed = range.len();
        let start = range.start;
        self.lines
            .splice(range, replacement.iter().map(|text| HighlightedLine::pending(text)));

        let mut edited_end = start + replacement.len();
        if self.lines.is_empty() {
            self.lines.push(HighlightedLine::pending(""));
            edited_end = 1;
        }
        if removed != replacement.len() {
            self.renumber_errors(edited_end);
        }

        let relexed = self.relex(start, edited_end, entry_state);
        tracing::debug!(
            relexed_start = relexed.start,
            relexed_end = relexed.end,
            total = self.lines.len(),
            "edit applied"
        );
        Ok(relexed)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&HighlightedLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[HighlightedLine] {
        &self.lines
    }

    /// State in force before line `index`; the end state for
    /// `index >= line_count()`.
    pub fn state_before(&self, index: usize) -> &LexerState {
        self.lines
            .get(index)
            .map_or(&self.end_state, |line| &line.state_before)
    }

    /// State after the last line.
    pub fn end_state(&self) -> &LexerState {
        &self.end_state
    }

    /// What the document leaves unterminated.
    pub fn open_constructs(&self) -> OpenConstructs {
        self.end_state.open_constructs()
    }

    /// All errors in document order.
    pub fn errors(&self) -> impl Iterator<Item = &LexError> {
        self.lines.iter().flat_map(|line| line.errors.iter())
    }

    /// Every token with its zero-based line index.
    pub fn tokens(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| line.tokens.iter().map(move |token| (index, token)))
    }

    /// The document text, lines joined with `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(&line.text);
        }
        text
    }

    /// Re-lex from line `start` with `state`, at least through `edited_end`.
    fn relex(&mut self, start: usize, edited_end: usize, mut state: LexerState) -> Range<usize> {
        let mut index = start;
        while let Some(line) = self.lines.get_mut(index) {
            if index >= edited_end && line.state_before == state {
                tracing::trace!(line = index, "state converged");
                return start..index;
            }
            line.state_before.clone_from(&state);
            let output = lex_line(&line.text, line_number(index), &mut state, &self.config);
            line.tokens = output.tokens;
            line.errors = output.errors;
            index += 1;
        }
        self.end_state = state;
        start..index
    }

    /// Fix the line numbers of stored errors after lines were inserted or
    /// removed before them.
    fn renumber_errors(&mut self, from: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(from) {
            for error in &mut line.errors {
                error.line = line_number(index);
            }
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(LexerConfig::default())
    }
}

fn line_number(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
