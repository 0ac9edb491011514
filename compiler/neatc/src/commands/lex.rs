//! `neatc lex`: print the token stream of a file.

use neat_lexer::{lex_with_config, split_lines, LexOutput};

use super::{parse_options_or_exit, read_file};

/// Lex a file and print one token per line.
pub fn lex_file(path: &str, args: &[String]) {
    let options = parse_options_or_exit(args, true);
    let content = read_file(path);
    let output = lex_with_config(&content, &options.config);

    let token_count = output.tokens().count();
    println!("Tokens for '{path}' ({token_count} tokens):");
    print!("{}", format_tokens(&content, &output, options.styles));

    for error in &output.errors {
        eprintln!("error: {error}");
    }
}

/// Render tokens as `line:start..end  Tag  "text"`, one per line.
///
/// Lines are one-based, spans are zero-based byte offsets in the line.
pub fn format_tokens(source: &str, output: &LexOutput, styles: bool) -> String {
    let mut rendered = String::new();
    for (index, (line, lexed)) in split_lines(source).zip(&output.lines).enumerate() {
        for token in &lexed.tokens {
            let label = if styles {
                token.tag.style().to_owned()
            } else {
                token.tag.to_string()
            };
            let text = token.text(line.text).unwrap_or_default();
            rendered.push_str(&format!(
                "{}:{}  {label}  {text:?}\n",
                index + 1,
                token.span
            ));
        }
    }
    rendered
}
