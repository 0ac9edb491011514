//! Boolean literal recognition.
//!
//! A value is a boolean literal only when the literal is the whole value on
//! its line: it may be followed by whitespace and then nothing, a `#`
//! comment or a `/*` comment. `yes`, `Yes # on` and `0 /* off */` qualify;
//! `yesno` and `on call` do not.

/// Spellings of `true`, in the order they are tried.
const TRUTHY: [&str; 5] = ["YES", "Y", "ON", "TRUE", "1"];

/// Spellings of `false`, in the order they are tried.
const FALSY: [&str; 5] = ["NO", "N", "OFF", "FALSE", "0"];

/// Match a boolean literal at the start of `rest`, returning its byte
/// length. Trailing whitespace and comments are not included.
///
/// Matching is ASCII case-insensitive. The two spelling sets are disjoint,
/// so at most one literal can match.
pub fn match_boolean(rest: &str) -> Option<usize> {
    match_set(rest, &TRUTHY).or_else(|| match_set(rest, &FALSY))
}

fn match_set(rest: &str, spellings: &[&str]) -> Option<usize> {
    spellings.iter().find_map(|spelling| {
        let len = spelling.len();
        let head = rest.as_bytes().get(..len)?;
        // `spelling` is ASCII, so a case-insensitive match ends on a char boundary.
        (head.eq_ignore_ascii_case(spelling.as_bytes()) && ends_value(&rest[len..])).then_some(len)
    })
}

/// The text after a literal: optional whitespace, then end of line or a
/// comment start.
fn ends_value(tail: &str) -> bool {
    let tail = tail.trim_start();
    tail.is_empty() || tail.starts_with('#') || tail.starts_with("/*")
}

#[cfg(test)]
mod tests;
