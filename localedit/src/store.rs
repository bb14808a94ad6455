//! The translation store: the single authoritative collection of locale
//! dictionaries, the current selection, and the dirty flag.
//!
//! A store is a plain owned value. The presentation layer constructs one,
//! passes it by reference to whatever needs it, and drives it exclusively
//! through the operations below.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::limits::Limits;
use crate::sync::unify_key_sets;
use crate::types::{Locale, LocaleDictionary, SourceFile, locale_id_from_name};

/// Why one input file was skipped during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadIssueKind {
    /// The bytes were not valid UTF-8.
    InvalidUtf8,
    /// The text was not valid JSON.
    Syntax,
    /// The top-level JSON value was not an object.
    NotAnObject,
}

impl LoadIssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadIssueKind::InvalidUtf8 => "invalid_utf8",
            LoadIssueKind::Syntax => "syntax",
            LoadIssueKind::NotAnObject => "not_an_object",
        }
    }
}

/// Per-file load issue. Issues never block sibling files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadIssue {
    pub file: String,
    pub kind: LoadIssueKind,
    pub detail: String,
}

impl Display for LoadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.file, self.detail, self.kind.as_str())
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Locale identifiers now in the store, in input order.
    pub loaded: Vec<String>,

    /// Placeholder values inserted by key synchronization.
    pub keys_filled: usize,

    /// Files that were skipped, with the reason each one failed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub issues: Vec<LoadIssue>,
}

/// The locale → dictionary collection plus selection and dirty state.
#[derive(Debug, Default)]
pub struct TranslationStore {
    locales: Vec<Locale>,
    selected: Option<String>,
    dirty: bool,
    io_in_flight: bool,
}

impl TranslationStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        TranslationStore::default()
    }

    /// All locales, in load order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Finds a locale by its identifier, if present.
    pub fn get(&self, locale: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.id == locale)
    }

    /// The currently selected locale identifier.
    ///
    /// `None` exactly when the store is empty.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True when the store holds edits not yet reflected in an export.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Replaces the entire store with the locales parsed from `files`.
    ///
    /// The size guard runs first and rejects the whole batch before anything
    /// is parsed. Each remaining file is decoded as UTF-8 and parsed as a
    /// JSON object; files that fail are recorded as issues and skipped. A
    /// later file with the same locale identifier overwrites an earlier one.
    ///
    /// If at least one file parsed, the new store replaces the old one with
    /// key sets unified, the first loaded locale becomes the selection, and
    /// the dirty flag is cleared. If none parsed, the previous store is left
    /// untouched and `Error::EmptyBatch` carries the per-file issues.
    pub fn load(&mut self, files: Vec<SourceFile>, limits: &Limits) -> Result<LoadReport, Error> {
        self.begin_io("load")?;
        let result = self.load_inner(files, limits);
        self.finish_io();
        result
    }

    fn load_inner(&mut self, files: Vec<SourceFile>, limits: &Limits) -> Result<LoadReport, Error> {
        limits.check_batch(files.iter().map(|f| (f.name.as_str(), f.byte_len())))?;

        let mut locales: Vec<Locale> = Vec::new();
        let mut issues = Vec::new();

        for file in &files {
            match parse_dictionary(&file.bytes) {
                Ok(entries) => {
                    let id = locale_id_from_name(&file.name);
                    if let Some(existing) = locales.iter_mut().find(|l| l.id == id) {
                        // Duplicate identifier: the later file wins, the
                        // earlier position is kept.
                        existing.entries = entries;
                    } else {
                        locales.push(Locale::new(id, entries));
                    }
                }
                Err((kind, detail)) => issues.push(LoadIssue {
                    file: file.name.clone(),
                    kind,
                    detail,
                }),
            }
        }

        if locales.is_empty() {
            return Err(Error::EmptyBatch { issues });
        }

        let keys_filled = unify_key_sets(&mut locales);
        let loaded: Vec<String> = locales.iter().map(|l| l.id.clone()).collect();

        self.selected = loaded.first().cloned();
        self.locales = locales;
        self.dirty = false;

        Ok(LoadReport {
            loaded,
            keys_filled,
            issues,
        })
    }

    /// Sets the value of an existing key in the selected locale.
    ///
    /// Returns `Error::NoOp` if the store is empty, `locale` is not the
    /// current selection, or the key is not present. The value itself is not
    /// validated; newlines and any other content pass through unchanged.
    pub fn update(
        &mut self,
        locale: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), Error> {
        if self.locales.is_empty() {
            return Err(Error::no_op("store is empty"));
        }
        if self.selected.as_deref() != Some(locale) {
            return Err(Error::no_op(format!(
                "locale `{locale}` is not the active selection"
            )));
        }
        let Some(slot) = self
            .locales
            .iter_mut()
            .find(|l| l.id == locale)
            .and_then(|l| l.entries.get_mut(key))
        else {
            return Err(Error::no_op(format!(
                "key `{key}` is not present in `{locale}`"
            )));
        };

        *slot = value.into();
        self.dirty = true;
        Ok(())
    }

    /// Adds `key` with an empty value to every locale lacking it.
    ///
    /// Idempotent; the dirty flag is set only when a dictionary actually
    /// changed. Returns `Error::NoOp` for an empty key or an empty store.
    pub fn add_key(&mut self, key: &str) -> Result<(), Error> {
        if key.is_empty() {
            return Err(Error::no_op("key is empty"));
        }
        if self.locales.is_empty() {
            return Err(Error::no_op("store is empty"));
        }

        let mut changed = false;
        for locale in &mut self.locales {
            if !locale.entries.contains_key(key) {
                locale.entries.insert(key.to_string(), String::new());
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
        Ok(())
    }

    /// Removes one locale from the store.
    ///
    /// If it was selected, the first remaining locale (in store order)
    /// becomes the selection. Closing the last locale leaves an empty, clean
    /// store.
    pub fn close_locale(&mut self, locale: &str) -> Result<(), Error> {
        let Some(position) = self.locales.iter().position(|l| l.id == locale) else {
            return Err(Error::not_found(locale));
        };

        self.locales.remove(position);

        if self.selected.as_deref() == Some(locale) {
            self.selected = self.locales.first().map(|l| l.id.clone());
        }
        if self.locales.is_empty() {
            self.dirty = false;
        }
        Ok(())
    }

    /// Changes the selection to an existing locale.
    pub fn select_locale(&mut self, locale: &str) -> Result<(), Error> {
        if self.get(locale).is_none() {
            return Err(Error::not_found(locale));
        }
        self.selected = Some(locale.to_string());
        Ok(())
    }

    /// Marks the in-flight I/O guard. A second load/export while one is
    /// running is rejected rather than queued.
    pub(crate) fn begin_io(&mut self, operation: &'static str) -> Result<(), Error> {
        if self.io_in_flight {
            return Err(Error::Busy(operation));
        }
        self.io_in_flight = true;
        Ok(())
    }

    pub(crate) fn finish_io(&mut self) {
        self.io_in_flight = false;
    }

    /// Clears the dirty flag after a durable export.
    pub(crate) fn mark_exported(&mut self) {
        self.dirty = false;
    }
}

/// Parses one file's bytes into a flat dictionary.
///
/// Values that are not JSON strings are coerced to the empty string; keys
/// that are empty strings are dropped.
fn parse_dictionary(bytes: &[u8]) -> Result<LocaleDictionary, (LoadIssueKind, String)> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| (LoadIssueKind::InvalidUtf8, e.to_string()))?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| (LoadIssueKind::Syntax, e.to_string()))?;
    let Value::Object(object) = value else {
        return Err((
            LoadIssueKind::NotAnObject,
            "top-level JSON value is not an object".to_string(),
        ));
    };

    let mut entries = LocaleDictionary::new();
    for (key, value) in object {
        if key.is_empty() {
            continue;
        }
        entries.insert(key, coerce_value(value));
    }
    Ok(entries)
}

/// Collapses a dynamic JSON value into the store's closed value model:
/// a string, or the empty string for anything that is not one.
fn coerce_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}
