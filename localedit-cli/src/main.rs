mod edit;
mod export;
mod input;
mod stats;
mod view;

use clap::{Parser, Subcommand};
use localedit::Limits;
use localedit::limits::{DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_TOTAL_BYTES};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Per-file input size budget in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FILE_BYTES)]
    max_file_size: u64,

    /// Aggregate input size budget in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TOTAL_BYTES)]
    max_total_size: u64,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View translation dictionaries, untranslated keys first.
    View {
        /// The locale JSON files to load
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<String>,

        /// Show only this locale
        #[arg(short, long)]
        lang: Option<String>,

        /// Case-insensitive substring filter over keys and values
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Display full values without truncation
        #[arg(long)]
        full: bool,
    },

    /// Set the value of a key in one locale and re-export all locales.
    Set {
        /// The locale JSON files to load
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<String>,

        /// Locale to edit
        #[arg(short, long)]
        lang: String,

        /// Key to update
        #[arg(short, long)]
        key: String,

        /// New value (content is not validated, newlines included)
        #[arg(short, long)]
        value: String,

        /// Add the key to every locale first if it does not exist yet
        #[arg(long)]
        create: bool,

        /// Output directory for the re-exported files
        #[arg(short, long)]
        out: String,
    },

    /// Add a key with empty values to every locale and re-export.
    AddKey {
        /// The locale JSON files to load
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<String>,

        /// Key to add
        #[arg(short, long)]
        key: String,

        /// Output directory for the re-exported files
        #[arg(short, long)]
        out: String,
    },

    /// Export dictionaries as canonical JSON (sorted keys, 2-space indent).
    Export {
        /// The locale JSON files to load
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<String>,

        /// Export only this locale
        #[arg(short, long)]
        lang: Option<String>,

        /// Output directory
        #[arg(short, long)]
        out: String,
    },

    /// Show per-locale completion statistics.
    Stats {
        /// The locale JSON files to load
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    let limits = Limits {
        max_file_bytes: args.max_file_size,
        max_total_bytes: args.max_total_size,
    };

    let outcome = match args.commands {
        Commands::View {
            inputs,
            lang,
            filter,
            full,
        } => view::run_view(&inputs, &lang, &filter, full, &limits),
        Commands::Set {
            inputs,
            lang,
            key,
            value,
            create,
            out,
        } => edit::run_set(&inputs, &lang, &key, value, create, &out, &limits),
        Commands::AddKey { inputs, key, out } => edit::run_add_key(&inputs, &key, &out, &limits),
        Commands::Export { inputs, lang, out } => export::run_export(&inputs, &lang, &out, &limits),
        Commands::Stats { inputs, json } => stats::run_stats(&inputs, json, &limits),
    };

    if let Err(message) = outcome {
        eprintln!("❌ {message}");
        std::process::exit(1);
    }
}
