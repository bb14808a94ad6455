//! Canonical JSON export of locale dictionaries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::store::TranslationStore;
use crate::types::Locale;

/// Serializes one locale's dictionary to canonical JSON text.
///
/// Canonical form: keys in strictly ascending lexicographic order, 2-space
/// indentation, no trailing data. This order is independent of the display
/// order the query engine produces.
pub fn canonical_json(locale: &Locale) -> Result<String, Error> {
    serde_json::to_string_pretty(&locale.entries).map_err(Error::Json)
}

/// Writes `<out_dir>/<locale>.json` for one locale, overwriting any existing
/// file, and clears the store's dirty flag.
///
/// Returns `Error::NotFound` if the locale is absent. The output directory is
/// created if missing.
///
/// The dirty flag is cleared for the whole store even when other locales
/// still hold unexported edits.
pub fn export_locale(
    store: &mut TranslationStore,
    locale: &str,
    out_dir: &Path,
) -> Result<PathBuf, Error> {
    store.begin_io("export")?;
    let result = export_locale_inner(store, locale, out_dir);
    store.finish_io();
    result
}

fn export_locale_inner(
    store: &mut TranslationStore,
    locale: &str,
    out_dir: &Path,
) -> Result<PathBuf, Error> {
    let Some(target) = store.get(locale) else {
        return Err(Error::not_found(locale));
    };

    fs::create_dir_all(out_dir)?;
    let path = write_locale(target, out_dir)?;

    store.mark_exported();
    Ok(path)
}

/// Exports every locale in the store with the same serialization rule.
///
/// Fail-fast: the first failing write aborts the operation and names the
/// locale that failed; nothing further is attempted. On success the dirty
/// flag is cleared.
pub fn export_all(store: &mut TranslationStore, out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    store.begin_io("export")?;
    let result = export_all_inner(store, out_dir);
    store.finish_io();
    result
}

fn export_all_inner(store: &mut TranslationStore, out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(store.len());
    for locale in store.locales() {
        written.push(write_locale(locale, out_dir)?);
    }

    store.mark_exported();
    Ok(written)
}

fn write_locale(locale: &Locale, out_dir: &Path) -> Result<PathBuf, Error> {
    let path = out_dir.join(format!("{}.json", locale.id));
    let body = canonical_json(locale)?;
    fs::write(&path, body).map_err(|source| Error::Write {
        locale: locale.id.clone(),
        source,
    })?;
    Ok(path)
}
