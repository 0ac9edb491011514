use super::*;

const ALL_TAGS: [Tag; 13] = [
    Tag::Error,
    Tag::EscapedBacktick,
    Tag::Placeholder,
    Tag::RawString,
    Tag::Comment,
    Tag::Bracket,
    Tag::KeyLabel,
    Tag::KeyInherit,
    Tag::KeyMerge,
    Tag::KeyDelete,
    Tag::Keyword,
    Tag::Builtin,
    Tag::Variable,
];

// === Discriminants ===

#[test]
fn repr_u8_groups() {
    assert_eq!(Tag::Error as u8, 0);
    assert_eq!(Tag::EscapedBacktick as u8, 1);
    assert_eq!(Tag::Comment as u8, 4);
    assert_eq!(Tag::Bracket as u8, 5);
    assert_eq!(Tag::KeyLabel as u8, 6);
    assert_eq!(Tag::Keyword as u8, 10);
    assert_eq!(Tag::Builtin as u8, 11);
    assert_eq!(Tag::Variable as u8, 12);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<Tag>(), 1);
}

#[test]
fn discriminants_are_contiguous() {
    for (i, tag) in ALL_TAGS.iter().enumerate() {
        assert_eq!(*tag as usize, i, "{tag:?} out of order");
    }
}

// === Styles ===

#[test]
fn styles_match_editor_theme_names() {
    assert_eq!(Tag::Error.style(), "error");
    assert_eq!(Tag::EscapedBacktick.style(), "string-2");
    assert_eq!(Tag::Placeholder.style(), "placeholder");
    assert_eq!(Tag::RawString.style(), "quote");
    assert_eq!(Tag::Comment.style(), "comment");
    assert_eq!(Tag::Bracket.style(), "bracket");
    assert_eq!(Tag::KeyLabel.style(), "key-label");
    assert_eq!(Tag::KeyInherit.style(), "key-inherit");
    assert_eq!(Tag::KeyMerge.style(), "key-merge");
    assert_eq!(Tag::KeyDelete.style(), "key-delete");
    assert_eq!(Tag::Keyword.style(), "keyword");
    assert_eq!(Tag::Builtin.style(), "builtin");
    assert_eq!(Tag::Variable.style(), "variable");
}

#[test]
fn styles_are_distinct() {
    let mut styles: Vec<_> = ALL_TAGS.iter().map(|t| t.style()).collect();
    styles.sort_unstable();
    styles.dedup();
    assert_eq!(styles.len(), ALL_TAGS.len());
}

// === Keys ===

#[test]
fn key_lead_subclasses() {
    assert_eq!(Tag::for_key_lead(Some(':')), Tag::KeyLabel);
    assert_eq!(Tag::for_key_lead(Some('@')), Tag::KeyInherit);
    assert_eq!(Tag::for_key_lead(Some('+')), Tag::KeyMerge);
    assert_eq!(Tag::for_key_lead(Some('-')), Tag::KeyDelete);
    assert_eq!(Tag::for_key_lead(Some('k')), Tag::Keyword);
    assert_eq!(Tag::for_key_lead(None), Tag::Keyword);
}

#[test]
fn is_key_covers_exactly_the_key_tags() {
    let keys: Vec<_> = ALL_TAGS.iter().copied().filter(|t| t.is_key()).collect();
    assert_eq!(
        keys,
        [
            Tag::KeyLabel,
            Tag::KeyInherit,
            Tag::KeyMerge,
            Tag::KeyDelete,
            Tag::Keyword
        ]
    );
}

#[test]
fn display_uses_variant_name() {
    assert_eq!(Tag::KeyMerge.to_string(), "KeyMerge");
}
