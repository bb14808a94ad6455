use std::path::Path;

use localedit::{Error, Limits};

use crate::input;

/// `set`: update one key in one locale, then re-export every locale.
pub fn run_set(
    paths: &[String],
    lang: &str,
    key: &str,
    value: String,
    create: bool,
    out: &str,
    limits: &Limits,
) -> Result<(), String> {
    let (mut store, report) = input::load_store(paths, limits)?;
    input::report_issues(&report);

    store.select_locale(lang).map_err(|e| e.to_string())?;

    if create {
        store.add_key(key).map_err(|e| e.to_string())?;
    }

    match store.update(lang, key, value) {
        Ok(()) => println!("✅ Updated '{key}' in {lang}"),
        Err(Error::NoOp(reason)) => {
            return Err(format!(
                "Nothing updated: {reason} (use --create to add a missing key)"
            ));
        }
        Err(e) => return Err(e.to_string()),
    }

    write_out(&mut store, out)
}

/// `add-key`: add a key with empty values everywhere, then re-export.
pub fn run_add_key(
    paths: &[String],
    key: &str,
    out: &str,
    limits: &Limits,
) -> Result<(), String> {
    let (mut store, report) = input::load_store(paths, limits)?;
    input::report_issues(&report);

    match store.add_key(key) {
        Ok(()) => println!("✅ Added '{key}' to every locale"),
        Err(Error::NoOp(reason)) => return Err(format!("Nothing added: {reason}")),
        Err(e) => return Err(e.to_string()),
    }

    write_out(&mut store, out)
}

fn write_out(store: &mut localedit::TranslationStore, out: &str) -> Result<(), String> {
    let written =
        localedit::export_all(store, Path::new(out)).map_err(|e| e.to_string())?;
    println!("📄 Wrote {} file(s) to {out}", written.len());
    Ok(())
}
