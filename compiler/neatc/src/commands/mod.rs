//! Command handlers for the `neatc` CLI.
//!
//! Each submodule implements one command. Option parsing and `read_file`
//! are shared and live here.

use neat_lexer::LexerConfig;

mod check;
mod lex;

pub use check::{check_file, check_source, CheckSummary};
pub use lex::{format_tokens, lex_file};

/// Options accepted after the file argument.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandOptions {
    pub config: LexerConfig,
    /// Print style names instead of tag names.
    pub styles: bool,
}

/// Parse command options; `--styles` is only accepted when `allow_styles`.
pub fn parse_options(args: &[String], allow_styles: bool) -> Result<CommandOptions, String> {
    let (config, rejected) = LexerConfig::from_flags(args.iter().map(String::as_str));
    let mut options = CommandOptions {
        config,
        styles: false,
    };
    for (arg, reason) in rejected {
        match reason {
            Some(reason) => return Err(reason),
            None if allow_styles && arg == "--styles" => options.styles = true,
            None => return Err(format!("unknown option '{arg}'")),
        }
    }
    Ok(options)
}

/// Parse options or print the problem and exit with status 1.
fn parse_options_or_exit(args: &[String], allow_styles: bool) -> CommandOptions {
    match parse_options(args, allow_styles) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Read a file, or print why it cannot be read and exit with status 1.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
