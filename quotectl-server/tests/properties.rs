use quotectl_server::models::{preview, EntryText, PREVIEW_CHARS};
use quotectl_server::render::{escape_html, nl2br};
use proptest::prelude::*;

proptest! {
    /// Property: previews never exceed the limit plus the ellipsis
    #[test]
    fn prop_preview_is_bounded(text in "\\PC{0,200}") {
        let out = preview(&text, PREVIEW_CHARS);
        let len = text.chars().count();

        if len <= PREVIEW_CHARS {
            prop_assert_eq!(&out, &text);
        } else {
            prop_assert_eq!(out.chars().count(), PREVIEW_CHARS + 3);
            prop_assert!(out.ends_with("..."));
            prop_assert!(text.starts_with(out.trim_end_matches("...")));
        }
    }

    /// Property: escaped text carries no raw markup characters
    #[test]
    fn prop_escape_removes_markup(text in ".*") {
        let out = escape_html(&text);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
        prop_assert!(!out.contains('\''));
    }

    /// Property: nl2br only introduces `<br />` tags
    #[test]
    fn prop_nl2br_only_adds_breaks(text in "[a-z<>&\n ]{0,60}") {
        let out = nl2br(&text).replace("<br />", "");
        prop_assert!(!out.contains('<'));
        prop_assert_eq!(out.matches('\n').count(), text.matches('\n').count());
    }

    /// Property: whitespace-only submissions never validate for create
    #[test]
    fn prop_blank_create_rejected(phrase in "[ \t\n]{0,10}", jokes in "[ \t\n]{0,10}") {
        prop_assert!(EntryText::for_create(Some(&phrase), Some(&jokes)).is_err());
    }

    /// Property: stored text is the trimmed input
    #[test]
    fn prop_entry_text_is_trimmed(phrase in "[ ]{0,3}[a-z]{1,20}[ ]{0,3}") {
        let text = EntryText::for_create(Some(&phrase), None).unwrap();
        prop_assert_eq!(text.phrase(), Some(phrase.trim()));
        prop_assert_eq!(text.jokes(), None);
    }
}
