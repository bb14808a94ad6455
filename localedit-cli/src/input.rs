//! Reads locale files from disk into the name + bytes pairs the core expects.

use std::path::Path;

use localedit::{Limits, LoadReport, SourceFile, TranslationStore};

/// Reads each path into a `SourceFile` named after the file itself.
pub fn read_source_files(paths: &[String]) -> Result<Vec<SourceFile>, String> {
    paths
        .iter()
        .map(|path| {
            let bytes =
                std::fs::read(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
            let name = Path::new(path)
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(path.as_str())
                .to_string();
            Ok(SourceFile::new(name, bytes))
        })
        .collect()
}

/// Loads all paths into a fresh store.
pub fn load_store(
    paths: &[String],
    limits: &Limits,
) -> Result<(TranslationStore, LoadReport), String> {
    let files = read_source_files(paths)?;
    let mut store = TranslationStore::new();
    let report = store
        .load(files, limits)
        .map_err(|e| format!("Failed to load inputs: {e}"))?;
    Ok((store, report))
}

/// Prints every skipped input file to stderr.
pub fn report_issues(report: &LoadReport) {
    for issue in &report.issues {
        eprintln!("⚠️  Skipped {issue}");
    }
}
