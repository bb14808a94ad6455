//! Per-locale completion statistics over a store.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::store::TranslationStore;

/// Completion numbers for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleStats {
    pub locale: String,
    pub total: usize,
    pub translated: usize,
    pub untranslated: usize,
    pub completion_percent: f64,
}

/// Completion numbers for the whole store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreStats {
    pub locales: usize,
    pub unique_keys: usize,
    pub per_locale: Vec<LocaleStats>,
}

/// Counts translated (non-empty) and untranslated (empty) values per locale.
pub fn completion_stats(store: &TranslationStore) -> StoreStats {
    let unique_keys: BTreeSet<&String> = store
        .locales()
        .iter()
        .flat_map(|locale| locale.entries.keys())
        .collect();

    let per_locale = store
        .locales()
        .iter()
        .map(|locale| {
            let total = locale.entries.len();
            let untranslated = locale.untranslated();
            let translated = total - untranslated;
            let percent = if total == 0 {
                100.0
            } else {
                (translated as f64) * 100.0 / (total as f64)
            };
            LocaleStats {
                locale: locale.id.clone(),
                total,
                translated,
                untranslated,
                completion_percent: (percent * 100.0).round() / 100.0,
            }
        })
        .collect();

    StoreStats {
        locales: store.len(),
        unique_keys: unique_keys.len(),
        per_locale,
    }
}
