//! `neatc check`: report lexer errors and unterminated constructs.

use std::io::{self, IsTerminal, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use neat_lexer::{lex_with_config, LexError, LexOutput, LexerConfig, OpenConstructs};

use super::{parse_options_or_exit, read_file};

/// Counts of what `check` reported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckSummary {
    pub errors: usize,
    pub warnings: usize,
}

/// Check a file, rendering diagnostics to stderr. Exits with status 1 when
/// errors were found.
pub fn check_file(path: &str, args: &[String]) {
    let options = parse_options_or_exit(args, false);
    let content = read_file(path);
    let color = io::stderr().is_terminal();

    let summary = match check_source(path, &content, &options.config, &mut io::stderr(), color) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error writing diagnostics: {e}");
            std::process::exit(1);
        }
    };

    if summary.errors > 0 {
        eprintln!(
            "{path}: {} error(s), {} warning(s)",
            summary.errors, summary.warnings
        );
        std::process::exit(1);
    }
    if summary.warnings > 0 {
        println!("{path}: ok, {} warning(s)", summary.warnings);
    } else {
        println!("{path}: ok");
    }
}

/// Lex `source` and write a report for every error and every construct
/// left open at end of file.
pub fn check_source(
    path: &str,
    source: &str,
    config: &LexerConfig,
    out: &mut impl Write,
    color: bool,
) -> io::Result<CheckSummary> {
    let output = lex_with_config(source, config);
    let report_config = Config::default().with_color(color);
    let mut summary = CheckSummary::default();

    for error in &output.errors {
        let range = error_range(source, &output, error);
        let mut report = Report::build(ReportKind::Error, path, range.start)
            .with_config(report_config)
            .with_message(error.kind)
            .with_label(
                Label::new((path, range))
                    .with_message(error.label())
                    .with_color(Color::Red),
            )
            .with_help(error.suggestion());
        if let Some(consequence) = error.consequence() {
            report = report.with_note(consequence);
        }
        report.finish().write((path, Source::from(source)), &mut *out)?;
        summary.errors += 1;
    }

    let end = source.chars().count();
    for message in open_construct_messages(output.end_state.open_constructs()) {
        Report::<(&str, Range<usize>)>::build(ReportKind::Warning, path, end)
            .with_config(report_config)
            .with_message(message)
            .finish()
            .write((path, Source::from(source)), &mut *out)?;
        summary.warnings += 1;
    }

    tracing::debug!(
        path,
        errors = summary.errors,
        warnings = summary.warnings,
        "check finished"
    );
    Ok(summary)
}

/// Character range of an error in the whole document.
fn error_range(source: &str, output: &LexOutput, error: &LexError) -> Range<usize> {
    let Some(span) = output.absolute_span(error.line, error.span) else {
        return 0..0;
    };
    let start = char_offset(source, span.start as usize);
    let end = char_offset(source, span.end as usize);
    start..end
}

fn char_offset(source: &str, byte: usize) -> usize {
    source.get(..byte).map_or(0, |prefix| prefix.chars().count())
}

fn open_construct_messages(open: OpenConstructs) -> Vec<String> {
    let mut messages = Vec::new();
    match open.unclosed_blocks {
        0 => {}
        1 => messages.push("1 block is not closed at end of file".to_owned()),
        n => messages.push(format!("{n} blocks are not closed at end of file")),
    }
    if open.raw_string {
        messages.push("raw string is not terminated at end of file".to_owned());
    }
    if open.block_comment {
        messages.push("block comment is not terminated at end of file".to_owned());
    }
    if open.placeholder {
        messages.push("placeholder is not terminated at end of file".to_owned());
    }
    messages
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
