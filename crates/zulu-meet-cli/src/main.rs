//! Terminal rendering surface for the zone-letter widget.
//!
//! All computation lives in `zulu_core`; this binary only reads the clock
//! and the locale file, forwards control values into the pure layer, and
//! prints the resulting display regions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use zulu_core::{
    all_entries, default_meeting_moment, format_offset, letter_for, local_badge,
    local_offset_hours, parse_moment, Locale, LocaleCatalog, ViewInputs, WidgetView,
};

#[derive(Parser)]
#[command(name = "zulu", version, about = "Military zone-letter meeting codes")]
struct Cli {
    /// Path to the locale JSON document.
    #[arg(long, global = true, default_value = "locales/locale.json")]
    locales: PathBuf,

    /// Language tag to select from the locale catalog.
    #[arg(long, global = true, default_value = "en-us")]
    lang: String,

    /// Emit machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 25-entry designator table, +12 down to -12.
    Table,

    /// Format the phonetic time code and note for a meeting.
    Code {
        /// Zone offset in whole hours. Defaults to the device's offset.
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i32>,

        /// Meeting time (e.g. 2026-03-16T14:30). Defaults to the current
        /// hour; an unparsable value falls back to now.
        #[arg(long)]
        time: Option<String>,

        /// Meeting name prefixed to the note.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the device's local-offset badge and the how-to lines.
    Local,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let locale = load_locale(&cli.locales, &cli.lang);

    match cli.command {
        Command::Table => print_table(&locale, cli.json),
        Command::Code { offset, time, name } => {
            print_code(&locale, offset, time.as_deref(), name.as_deref(), cli.json)
        }
        Command::Local => print_local(&locale, cli.json),
    }
}

/// Read and select the active locale. A missing or malformed file is only
/// worth a warning; the built-in defaults are a complete outcome.
fn load_locale(path: &Path, lang: &str) -> Locale {
    let catalog = match fs::read_to_string(path) {
        Ok(json) => LocaleCatalog::parse_or_default(&json),
        Err(err) => {
            warn!(path = %path.display(), %err, "locale load failed, using defaults");
            LocaleCatalog::default()
        }
    };
    catalog.select(lang)
}

fn device_offset_minutes() -> i32 {
    Local::now().offset().local_minus_utc() / 60
}

fn print_table(locale: &Locale, json: bool) -> Result<()> {
    let entries = all_entries();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {}{}",
            entry.letter,
            locale.reference_utc(),
            format_offset(entry.offset)
        );
    }
    Ok(())
}

fn print_code(
    locale: &Locale,
    offset: Option<i32>,
    time: Option<&str>,
    name: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = Local::now().naive_local();
    let local_offset_minutes = device_offset_minutes();

    let moment = match time {
        Some(raw) => parse_moment(raw).unwrap_or_else(|| {
            warn!(input = raw, "unparsable meeting time, using the current instant");
            now
        }),
        None => default_meeting_moment(now),
    };

    let inputs = ViewInputs {
        offset: offset.unwrap_or_else(|| local_offset_hours(local_offset_minutes)),
        moment,
        local_offset_minutes,
        meeting_name: name,
    };
    let view = WidgetView::build(&inputs, locale);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("{}", view.formatted_code);
    println!("{}", view.note);
    println!("{} ({})", view.letter_display, view.offset_display);
    Ok(())
}

fn print_local(locale: &Locale, json: bool) -> Result<()> {
    let hours = local_offset_hours(device_offset_minutes());
    let badge = local_badge(locale.local_badge(), hours, letter_for(hours));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "offset_hours": hours,
                "badge": badge,
                "how_lines": locale.how_list(),
            }))?
        );
        return Ok(());
    }
    println!("{badge}");
    for line in locale.how_list() {
        println!("  - {line}");
    }
    Ok(())
}
