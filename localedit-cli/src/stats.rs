use localedit::{Limits, completion_stats};

use crate::input;

/// `stats`: per-locale completion numbers, as text or JSON.
pub fn run_stats(paths: &[String], json_output: bool, limits: &Limits) -> Result<(), String> {
    let (store, report) = input::load_store(paths, limits)?;
    input::report_issues(&report);

    let stats = completion_stats(&store);

    if json_output {
        let body = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{body}");
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Locales: {}", stats.locales);
    println!("Unique keys: {}", stats.unique_keys);

    for lang in &stats.per_locale {
        println!("\nLocale: {}", lang.locale);
        println!("  Total: {}", lang.total);
        println!("  Translated: {}", lang.translated);
        println!("  Untranslated: {}", lang.untranslated);
        println!("  Completion: {:.2}%", lang.completion_percent);
    }

    for locale in store.locales() {
        if locale.parse_language_identifier().is_none() {
            eprintln!("⚠️  '{}' is not a recognizable language tag", locale.id);
        }
    }

    Ok(())
}
