//! Core types for localedit: source files, locales, and their dictionaries.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Flat mapping from translation key to translation value.
///
/// The empty string is the sentinel for "missing/untranslated"; values are
/// never absent for a key another locale defines. The map's natural key order
/// doubles as the canonical export order.
pub type LocaleDictionary = BTreeMap<String, String>;

/// One candidate input file: a name and its raw bytes.
///
/// The presentation layer owns file selection and reading; the core only ever
/// sees name + content pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The file name (with extension) the bytes came from.
    pub name: String,

    /// The raw, undecoded file content.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        SourceFile {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Byte length of the content, as measured by the resource guard.
    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// The locale identifier this file would load under.
    pub fn locale_id(&self) -> String {
        locale_id_from_name(&self.name)
    }
}

/// Derives a locale identifier from a file name by stripping the extension.
pub fn locale_id_from_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// One named translation dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Locale {
    /// Identifier derived from the input file name (e.g. "en", "pt-BR").
    pub id: String,

    /// The key → value dictionary for this locale.
    pub entries: LocaleDictionary,
}

impl Locale {
    pub fn new(id: impl Into<String>, entries: LocaleDictionary) -> Self {
        Locale {
            id: id.into(),
            entries,
        }
    }

    /// Parses the locale identifier as a BCP-47 language tag, if it is one.
    ///
    /// Advisory only: any non-empty file stem is a usable identifier, this
    /// just lets callers flag suspicious input names.
    pub fn parse_language_identifier(&self) -> Option<LanguageIdentifier> {
        self.id.parse().ok()
    }

    /// Number of keys whose value is the empty (untranslated) sentinel.
    pub fn untranslated(&self) -> usize {
        self.entries.values().filter(|v| v.is_empty()).count()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} entries)", self.id, self.entries.len())
    }
}
