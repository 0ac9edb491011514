//! Lexing configuration.

use neat_lexer_core::ErrorPolicy;

/// How a document is lexed and how its tokens are reported.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LexerConfig {
    /// Behavior after a `}` with no open block.
    pub error_policy: ErrorPolicy,
    /// Merge adjacent tokens with the same tag on a line.
    pub coalesce: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            error_policy: ErrorPolicy::Sticky,
            coalesce: true,
        }
    }
}

/// Outcome of offering a command-line argument to [`LexerConfig::apply_flag`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FlagOutcome {
    /// The flag was recognized and applied.
    Applied,
    /// The flag belongs to the lexer but its value is invalid.
    Invalid(String),
    /// Not a lexer flag.
    Unknown,
}

/// Parse an error policy name (`sticky` or `resync`, case-insensitive).
pub fn parse_error_policy(name: &str) -> Option<ErrorPolicy> {
    if name.eq_ignore_ascii_case("sticky") {
        Some(ErrorPolicy::Sticky)
    } else if name.eq_ignore_ascii_case("resync") {
        Some(ErrorPolicy::Resync)
    } else {
        None
    }
}

impl LexerConfig {
    /// Apply one command-line flag.
    ///
    /// Recognized: `--sticky`, `--resync`, `--errors=<sticky|resync>`,
    /// `--coalesce`, `--no-coalesce`.
    pub fn apply_flag(&mut self, arg: &str) -> FlagOutcome {
        match arg {
            "--sticky" => self.error_policy = ErrorPolicy::Sticky,
            "--resync" => self.error_policy = ErrorPolicy::Resync,
            "--coalesce" => self.coalesce = true,
            "--no-coalesce" => self.coalesce = false,
            _ => {
                let Some(name) = arg.strip_prefix("--errors=") else {
                    return FlagOutcome::Unknown;
                };
                let Some(policy) = parse_error_policy(name) else {
                    return FlagOutcome::Invalid(format!(
                        "unknown error policy '{name}', options: sticky, resync"
                    ));
                };
                self.error_policy = policy;
            }
        }
        FlagOutcome::Applied
    }

    /// Build a configuration from flags, later flags overriding earlier ones.
    ///
    /// Returns the configuration plus every flag that was not applied, with
    /// a reason for the invalid ones.
    pub fn from_flags<'a>(
        args: impl IntoIterator<Item = &'a str>,
    ) -> (Self, Vec<(&'a str, Option<String>)>) {
        let mut config = LexerConfig::default();
        let mut rejected = Vec::new();
        for arg in args {
            match config.apply_flag(arg) {
                FlagOutcome::Applied => {}
                FlagOutcome::Invalid(reason) => rejected.push((arg, Some(reason))),
                FlagOutcome::Unknown => rejected.push((arg, None)),
            }
        }
        (config, rejected)
    }
}
