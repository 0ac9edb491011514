use super::*;

#[test]
fn every_spelling_matches_alone() {
    for spelling in TRUTHY {
        assert_eq!(match_boolean(spelling), Some(spelling.len()), "{spelling}");
    }
    for spelling in FALSY {
        assert_eq!(match_boolean(spelling), Some(spelling.len()), "{spelling}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(match_boolean("yes"), Some(3));
    assert_eq!(match_boolean("Yes"), Some(3));
    assert_eq!(match_boolean("tRuE"), Some(4));
    assert_eq!(match_boolean("oFf"), Some(3));
    assert_eq!(match_boolean("n"), Some(1));
}

#[test]
fn literal_must_be_the_whole_value() {
    assert_eq!(match_boolean("yesno"), None);
    assert_eq!(match_boolean("on call"), None);
    assert_eq!(match_boolean("10"), None);
    assert_eq!(match_boolean("truest"), None);
    assert_eq!(match_boolean("no-op"), None);
}

#[test]
fn trailing_whitespace_is_allowed_but_not_included() {
    assert_eq!(match_boolean("on   "), Some(2));
    assert_eq!(match_boolean("false\t"), Some(5));
}

#[test]
fn trailing_comments_are_allowed() {
    assert_eq!(match_boolean("yes # enable"), Some(3));
    assert_eq!(match_boolean("0/* disabled */"), Some(1));
    assert_eq!(match_boolean("Y#"), Some(1));
    assert_eq!(match_boolean("off /* a */ more"), Some(3));
}

#[test]
fn lone_slash_is_not_a_comment() {
    assert_eq!(match_boolean("yes / no"), None);
}

#[test]
fn longer_spelling_wins_over_its_prefix() {
    // `Y` is tried after `YES`; `N` after `NO`.
    assert_eq!(match_boolean("YES"), Some(3));
    assert_eq!(match_boolean("no"), Some(2));
    assert_eq!(match_boolean("y"), Some(1));
}

#[test]
fn non_ascii_input_does_not_match() {
    assert_eq!(match_boolean(""), None);
    assert_eq!(match_boolean("ÿes"), None);
    assert_eq!(match_boolean("Ｙ"), None);
}
