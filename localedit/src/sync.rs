//! Cross-locale key-set synchronization.

use std::collections::BTreeSet;

use crate::types::Locale;

/// Makes every locale expose the same key set.
///
/// Computes the union of all keys across all dictionaries and inserts every
/// key a locale is missing with the empty (untranslated) value. Returns the
/// number of placeholder values inserted.
///
/// Pure over its input slice; run immediately after a load. `add_key`
/// maintains the invariant directly and does not need a full pass.
pub fn unify_key_sets(locales: &mut [Locale]) -> usize {
    let union: BTreeSet<String> = locales
        .iter()
        .flat_map(|locale| locale.entries.keys().cloned())
        .collect();

    let mut filled = 0;
    for locale in locales.iter_mut() {
        for key in &union {
            if !locale.entries.contains_key(key) {
                locale.entries.insert(key.clone(), String::new());
                filled += 1;
            }
        }
    }
    filled
}
