use super::*;
use neat_lexer::ErrorPolicy;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn no_options_is_the_default() {
    assert_eq!(parse_options(&[], true), Ok(CommandOptions::default()));
}

#[test]
fn lexer_flags_and_styles() {
    let options = parse_options(&args(&["--resync", "--no-coalesce", "--styles"]), true);
    assert_eq!(
        options,
        Ok(CommandOptions {
            config: LexerConfig {
                error_policy: ErrorPolicy::Resync,
                coalesce: false,
            },
            styles: true,
        })
    );
}

#[test]
fn styles_rejected_where_not_supported() {
    assert_eq!(
        parse_options(&args(&["--styles"]), false),
        Err("unknown option '--styles'".to_owned())
    );
}

#[test]
fn invalid_policy_reports_the_reason() {
    let err = parse_options(&args(&["--errors=loose"]), true);
    assert!(matches!(err, Err(msg) if msg.contains("loose")));
}

#[test]
fn later_flags_override_earlier_ones() {
    let options = parse_options(&args(&["--styles", "--resync", "--errors=sticky"]), true);
    assert_eq!(
        options.map(|options| (options.config.error_policy, options.styles)),
        Ok((ErrorPolicy::Sticky, true))
    );
}
