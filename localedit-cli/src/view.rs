use indicatif::{ProgressBar, ProgressStyle};
use localedit::{Limits, TranslationStore, query};

use crate::input;

/// Print a view of the loaded dictionaries, untranslated keys first.
pub fn run_view(
    paths: &[String],
    lang: &Option<String>,
    filter: &str,
    full: bool,
    limits: &Limits,
) -> Result<(), String> {
    let progress_bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {wide_msg}") {
        progress_bar.set_style(style);
    }
    progress_bar.set_message("Loading dictionaries...");

    let (store, report) = input::load_store(paths, limits)?;
    progress_bar.finish_with_message(format!("✅ Loaded {} locale(s)", store.len()));
    input::report_issues(&report);

    let ids: Vec<String> = match lang {
        Some(lang) => {
            if store.get(lang).is_none() {
                return Err(format!("Locale '{lang}' not found in inputs"));
            }
            vec![lang.clone()]
        }
        None => store.locales().iter().map(|l| l.id.clone()).collect(),
    };

    for id in &ids {
        print_locale(&store, id, filter, full);
    }

    Ok(())
}

fn print_locale(store: &TranslationStore, id: &str, filter: &str, full: bool) {
    let Some(locale) = store.get(id) else {
        return;
    };

    println!("\n=== Locale {id} ===");
    if locale.parse_language_identifier().is_none() {
        println!("(identifier is not a recognizable language tag)");
    }
    println!("Entries: {}", locale.entries.len());
    println!("Untranslated: {}", locale.untranslated());

    for key in query::visible_keys(store, id, filter) {
        let value = locale
            .entries
            .get(&key)
            .map(String::as_str)
            .unwrap_or_default();
        if value.is_empty() {
            println!("  {key} = (untranslated)");
        } else if full || value.chars().count() <= 50 {
            println!("  {key} = {value}");
        } else {
            let truncated: String = value.chars().take(50).collect();
            println!("  {key} = {truncated}...");
        }
    }
}
