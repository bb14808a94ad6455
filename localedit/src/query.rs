//! Filtered, ordered key views over a locale's dictionary.

use crate::store::TranslationStore;

/// Produces the ordered key list a display layer should render.
///
/// An absent locale yields an empty list. A non-empty `query` keeps only keys
/// whose key text or value contains it as a case-insensitive substring. The
/// result orders empty-valued (untranslated) keys first, then ascending
/// lexicographic key order within each group.
///
/// Pure and restartable; recomputing on every query change is fine for
/// dictionary-sized inputs.
pub fn visible_keys(store: &TranslationStore, locale: &str, query: &str) -> Vec<String> {
    let Some(locale) = store.get(locale) else {
        return Vec::new();
    };

    let needle = query.to_lowercase();
    let mut keys: Vec<(&str, bool)> = locale
        .entries
        .iter()
        .filter(|(key, value)| {
            needle.is_empty()
                || key.to_lowercase().contains(&needle)
                || value.to_lowercase().contains(&needle)
        })
        .map(|(key, value)| (key.as_str(), value.is_empty()))
        .collect();

    // Dictionary iteration is already in key order; a stable sort on the
    // emptiness rank keeps that order within each group.
    keys.sort_by_key(|&(_, is_empty)| !is_empty);

    keys.into_iter().map(|(key, _)| key.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;
    use crate::store::TranslationStore;
    use crate::types::SourceFile;

    fn store_with(content: &str) -> TranslationStore {
        let mut store = TranslationStore::new();
        store
            .load(
                vec![SourceFile::new("en.json", content.as_bytes().to_vec())],
                &Limits::default(),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_untranslated_keys_sort_first() {
        let store = store_with(r#"{"z": "", "a": "x", "m": ""}"#);
        assert_eq!(visible_keys(&store, "en", ""), vec!["m", "z", "a"]);
    }

    #[test]
    fn test_absent_locale_is_empty() {
        let store = store_with(r#"{"a": "x"}"#);
        assert!(visible_keys(&store, "de", "").is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_keys() {
        let store = store_with(r#"{"b": "2", "a": "1", "c": "3"}"#);
        assert_eq!(visible_keys(&store, "en", ""), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_query_matches_key_text() {
        let store = store_with(r#"{"greeting": "Hello", "farewell": "Bye"}"#);
        assert_eq!(visible_keys(&store, "en", "greet"), vec!["greeting"]);
    }

    #[test]
    fn test_query_matches_value_text() {
        let store = store_with(r#"{"greeting": "Hello", "farewell": "Bye"}"#);
        assert_eq!(visible_keys(&store, "en", "bye"), vec!["farewell"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let store = store_with(r#"{"Greeting": "HELLO"}"#);
        assert_eq!(visible_keys(&store, "en", "hello"), vec!["Greeting"]);
        assert_eq!(visible_keys(&store, "en", "GREET"), vec!["Greeting"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = store_with(r#"{"a": "x"}"#);
        assert!(visible_keys(&store, "en", "zzz").is_empty());
    }

    #[test]
    fn test_filter_and_ordering_compose() {
        let store = store_with(r#"{"note_b": "", "note_a": "done", "other": ""}"#);
        assert_eq!(
            visible_keys(&store, "en", "note"),
            vec!["note_b", "note_a"]
        );
    }

    #[test]
    fn test_does_not_mutate_store() {
        let store = store_with(r#"{"a": "x", "b": ""}"#);
        let before: Vec<_> = store.locales().to_vec();
        let _ = visible_keys(&store, "en", "a");
        assert_eq!(store.locales(), &before[..]);
    }
}
