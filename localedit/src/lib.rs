#![forbid(unsafe_code)]
//! Locale-keyed JSON translation dictionary toolkit.
//!
//! Manages a set of translation dictionaries loaded from flat JSON files,
//! keeps their key sets identical across locales, answers filtered and
//! ordered key queries for display, and serializes dictionaries back to
//! canonical JSON (ascending key order, 2-space indentation).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use localedit::{Limits, SourceFile, TranslationStore, export, query};
//!
//! let mut store = TranslationStore::new();
//! let files = vec![
//!     SourceFile::new("en.json", std::fs::read("en.json")?),
//!     SourceFile::new("fr.json", std::fs::read("fr.json")?),
//! ];
//! let report = store.load(files, &Limits::default())?;
//! println!("loaded {} locale(s)", report.loaded.len());
//!
//! // Untranslated keys first, then alphabetical.
//! let keys = query::visible_keys(&store, "fr", "");
//!
//! store.add_key("menu.quit")?;
//! store.update("en", "menu.quit", "Quit")?;
//!
//! export::export_all(&mut store, Path::new("out"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design
//!
//! - One [`TranslationStore`] value owns all state: the locale dictionaries
//!   in load order, the current selection, and the dirty flag. No globals.
//! - Loading replaces the store atomically; a batch in which no file parses
//!   leaves the previous store untouched.
//! - Every locale exposes the same key set; the empty string marks a missing
//!   translation.
//! - Export output is deterministic, so diffs over exported files stay
//!   meaningful.

pub mod error;
pub mod export;
pub mod limits;
pub mod query;
pub mod stats;
pub mod store;
pub mod sync;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    error::Error,
    export::{export_all, export_locale},
    limits::Limits,
    query::visible_keys,
    stats::{LocaleStats, StoreStats, completion_stats},
    store::{LoadIssue, LoadIssueKind, LoadReport, TranslationStore},
    sync::unify_key_sets,
    types::{Locale, LocaleDictionary, SourceFile},
};
