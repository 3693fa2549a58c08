use super::*;
use std::path::PathBuf;

mod common {
    use super::*;

    pub(super) fn entry(name: &str) -> AppEntry {
        AppEntry {
            name: AppName::try_from(name).unwrap(),
            path: PathBuf::from(format!("/usr/bin/{name}")),
            id: EntryId::default(),
        }
    }

    pub(super) fn make_name(s: &str) -> AppName {
        AppName::try_from(s).unwrap()
    }

    pub(super) fn labels(visible: &[VisibleEntry]) -> Vec<&str> {
        visible.iter().map(|v| v.label.as_str()).collect()
    }
}

mod visible_entries {
    use super::common::{entry, labels, make_name};
    use super::*;

    #[test]
    fn test_empty_query_returns_all_in_catalog_order() {
        let entries = [entry("Browser"), entry("Calc"), entry("Editor")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "");

        assert_eq!(labels(&visible), ["Browser", "Calc", "Editor"]);
        let indices: Vec<_> = visible.iter().map(|v| v.source_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let entries = [entry("Calculator"), entry("Browser"), entry("calc-helper")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "CALC");

        assert_eq!(labels(&visible), ["Calculator", "calc-helper"]);
    }

    #[test]
    fn test_match_anywhere_in_name() {
        let entries = [entry("MyEditor"), entry("Editor"), entry("Viewer")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "edit");

        assert_eq!(labels(&visible), ["MyEditor", "Editor"]);
    }

    #[test]
    fn test_source_index_addresses_unfiltered_catalog() {
        let entries = [entry("Browser"), entry("Calc"), entry("Editor")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "editor");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].source_index, 2);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let entries = [entry("Browser"), entry("Calc")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "zzz");

        assert!(visible.is_empty());
    }

    #[test]
    fn test_no_entries_yields_empty_list() {
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&[], &[make_name("Dangling")], "");

        assert!(visible.is_empty());
    }

    #[test]
    fn test_relative_order_preserved_among_matches() {
        let entries = [
            entry("beta"),
            entry("Alphabet"),
            entry("Gamma"),
            entry("abacus"),
        ];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &[], "ab");

        // Catalog order, never score order.
        assert_eq!(labels(&visible), ["Alphabet", "abacus"]);
    }
}

mod favorite_markup {
    use super::common::{entry, labels, make_name};
    use super::*;

    #[test]
    fn test_favorites_are_star_prefixed() {
        let entries = [entry("Browser"), entry("Calc")];
        let favorites = [make_name("Calc")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &favorites, "");

        assert_eq!(labels(&visible), ["Browser", "★ Calc"]);
    }

    #[test]
    fn test_markup_applies_within_filtered_view() {
        let entries = [entry("Calculator"), entry("Calc")];
        let favorites = [make_name("Calc")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &favorites, "calc");

        assert_eq!(labels(&visible), ["Calculator", "★ Calc"]);
    }

    #[test]
    fn test_duplicate_names_share_markup() {
        let entries = [entry("Calc"), entry("Calc")];
        let favorites = [make_name("Calc")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &favorites, "");

        assert_eq!(labels(&visible), ["★ Calc", "★ Calc"]);
    }

    #[test]
    fn test_dangling_favorites_are_ignored() {
        let entries = [entry("Browser")];
        let favorites = [make_name("Removed")];
        let mut engine = FilterEngine::new();

        let visible = engine.visible_entries(&entries, &favorites, "");

        assert_eq!(labels(&visible), ["Browser"]);
    }
}
