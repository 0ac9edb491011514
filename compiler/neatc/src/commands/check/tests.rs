use super::*;
use neat_lexer::ErrorPolicy;
use pretty_assertions::assert_eq;

fn check(source: &str, config: &LexerConfig) -> (CheckSummary, String) {
    let mut out = Vec::new();
    let summary = check_source("test.neat", source, config, &mut out, false).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn clean_file_reports_nothing() {
    let (summary, rendered) = check("server {\n  port 80\n}\n", &LexerConfig::default());
    assert_eq!(summary, CheckSummary::default());
    assert_eq!(rendered, "");
}

#[test]
fn unbalanced_brace_is_rendered() {
    let (summary, rendered) = check("a b\n}\n", &LexerConfig::default());
    assert_eq!(summary, CheckSummary { errors: 1, warnings: 0 });
    assert!(rendered.contains("unbalanced `}`: no open block to close"));
    assert!(rendered.contains("this `}` has no matching `{`"));
    assert!(rendered.contains("remove this `}`"));
    assert!(rendered.contains("everything after this point is marked as an error"));
}

#[test]
fn resync_reports_each_brace_without_the_sticky_note() {
    let config = LexerConfig {
        error_policy: ErrorPolicy::Resync,
        ..LexerConfig::default()
    };
    let (summary, rendered) = check("}\n}\n", &config);
    assert_eq!(summary.errors, 2);
    assert!(!rendered.contains("everything after this point"));
}

#[test]
fn open_constructs_are_warnings() {
    let (summary, rendered) = check("a {\n  b {\n    `raw", &LexerConfig::default());
    assert_eq!(summary, CheckSummary { errors: 0, warnings: 2 });
    assert!(rendered.contains("2 blocks are not closed at end of file"));
    assert!(rendered.contains("raw string is not terminated at end of file"));
}

#[test]
fn open_construct_messages_cover_every_construct() {
    let open = OpenConstructs {
        unclosed_blocks: 1,
        raw_string: false,
        block_comment: true,
        placeholder: true,
    };
    assert_eq!(
        open_construct_messages(open),
        [
            "1 block is not closed at end of file",
            "block comment is not terminated at end of file",
            "placeholder is not terminated at end of file",
        ]
    );
}

#[test]
fn char_offsets_count_characters() {
    assert_eq!(char_offset("héllo", 3), 2);
    assert_eq!(char_offset("abc", 10), 0);
}
