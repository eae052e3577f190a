//! Property tests for folder name normalization

use mod_order_tool::models::{ModEntry, needs_normalization, normalize_name};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_names_have_no_disallowed_chars(name in "[a-zA-Z0-9 _.\\-]{0,24}") {
        let normalized = normalize_name(&name);
        prop_assert!(!normalized.contains(' '));
        prop_assert!(!normalized.contains('_'));
        prop_assert!(!needs_normalization(&normalized));
    }

    #[test]
    fn clean_names_are_unchanged(name in "[a-zA-Z0-9.\\-\u{00e0}-\u{00ff}]{1,24}") {
        prop_assert!(!needs_normalization(&name));
        prop_assert_eq!(normalize_name(&name), name);
    }

    #[test]
    fn normalization_is_idempotent(name in "\\PC{0,24}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn only_spaces_and_underscores_are_removed(name in "\\PC{0,24}") {
        let kept: String = name.chars().filter(|c| *c != ' ' && *c != '_').collect();
        let entry = ModEntry::new(name.clone());
        prop_assert_eq!(entry.normalized_name(), kept);
        prop_assert_eq!(
            entry.needs_normalization(),
            name.contains(' ') || name.contains('_')
        );
    }
}
