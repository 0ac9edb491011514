use super::*;

fn brace_error(policy: ErrorPolicy) -> LexError {
    LexError::unbalanced_close_brace(
        2,
        UnbalancedCloseBrace {
            offset: 4,
            column: 4,
        },
        policy,
    )
}

#[test]
fn span_covers_the_brace() {
    let err = brace_error(ErrorPolicy::Sticky);
    assert_eq!(err.line, 2);
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(err.kind, LexErrorKind::UnbalancedCloseBrace);
}

#[test]
fn display_is_one_based() {
    let err = brace_error(ErrorPolicy::Sticky);
    assert_eq!(
        err.to_string(),
        "unbalanced `}`: no open block to close at 3:5"
    );
}

#[test]
fn display_uses_the_column_not_the_byte_offset() {
    let err = LexError::unbalanced_close_brace(
        0,
        UnbalancedCloseBrace {
            offset: 9,
            column: 5,
        },
        ErrorPolicy::Resync,
    );
    assert_eq!(err.span, Span::new(9, 10));
    assert_eq!(
        err.to_string(),
        "unbalanced `}`: no open block to close at 1:6"
    );
}

#[test]
fn sticky_errors_explain_the_consequence() {
    assert!(brace_error(ErrorPolicy::Sticky).consequence().is_some());
    assert_eq!(brace_error(ErrorPolicy::Resync).consequence(), None);
}

#[test]
fn label_and_suggestion_mention_braces() {
    let err = brace_error(ErrorPolicy::Resync);
    assert!(err.label().contains('}'));
    assert!(err.suggestion().contains('{'));
}
