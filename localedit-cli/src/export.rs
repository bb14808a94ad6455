use std::path::Path;

use localedit::Limits;

use crate::input;

/// `export`: write canonical JSON for one locale or all of them.
pub fn run_export(
    paths: &[String],
    lang: &Option<String>,
    out: &str,
    limits: &Limits,
) -> Result<(), String> {
    let (mut store, report) = input::load_store(paths, limits)?;
    input::report_issues(&report);

    let out_dir = Path::new(out);
    let written = match lang {
        Some(lang) => vec![
            localedit::export_locale(&mut store, lang, out_dir).map_err(|e| e.to_string())?,
        ],
        None => localedit::export_all(&mut store, out_dir).map_err(|e| e.to_string())?,
    };

    for path in &written {
        println!("📄 {}", path.display());
    }
    println!("✅ Exported {} locale(s)", written.len());
    Ok(())
}
