//! `alignment` command-line entry point.
//!
//! # Responsibility
//! - Collect the date, hemisphere and moon reading from flags and files.
//! - Resolve one alignment against the configured tables and print it.

use alignment_core::render::mark_feed_unavailable;
use alignment_core::{
    default_log_level, init_logging, open_prefs_db, parse_farmsense_payload, render_lines,
    AlignmentEngine, AlignmentQuery, AlignmentTables, Hemisphere, HemispherePreference,
    MoonReading, SqlitePreferenceStore,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve the celestial alignment for a date and hemisphere
#[derive(Parser, Debug)]
#[command(name = "alignment", version)]
#[command(about = "Resolve moon, deity, season, festival and zodiac alignment for a date")]
struct Args {
    /// Calendar date (YYYY-MM-DD); defaults to today's local date
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Hemisphere (northern|southern); saved as the preference when given
    #[arg(long)]
    hemisphere: Option<Hemisphere>,

    /// Latitude used to detect the hemisphere when none is stored
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// JSON rule tables; the built-in tables are used when omitted
    #[arg(long)]
    tables: Option<PathBuf>,

    /// FarmSense moonphases response body to read the moon from
    #[arg(long, conflicts_with_all = ["phase", "illumination", "moon_name"])]
    moon_payload: Option<PathBuf>,

    /// Moon phase name, e.g. "Waxing Gibbous"
    #[arg(long)]
    phase: Option<String>,

    /// Illuminated fraction between 0 and 1
    #[arg(long)]
    illumination: Option<String>,

    /// Traditional moon name, e.g. "Worm Moon"
    #[arg(long)]
    moon_name: Option<String>,

    /// SQLite file holding the hemisphere preference
    #[arg(long)]
    prefs_db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("alignment: {err}");
            return ExitCode::from(2);
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("alignment: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let owned_tables;
    let tables = match &args.tables {
        Some(path) => {
            owned_tables = AlignmentTables::from_json_file(path)?;
            &owned_tables
        }
        None => AlignmentTables::builtin()?,
    };

    let hemisphere = select_hemisphere(args)?;
    let (reading, feed_failed) = load_reading(args)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let query = AlignmentQuery::new(date, hemisphere);

    let result = AlignmentEngine::new(tables).resolve(&query, &reading);
    info!(
        "event=alignment_resolve module=cli status=ok date={} hemisphere={} rare_events={} retrogrades={}",
        date,
        hemisphere,
        result.rare_events.len(),
        result.active_retrogrades.len()
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let mut lines = render_lines(&result);
            if feed_failed {
                mark_feed_unavailable(&mut lines);
            }
            println!("date: {date} ({hemisphere})");
            for line in lines {
                println!("{}: {}", line.slot, line.text);
            }
        }
    }
    Ok(())
}

fn select_hemisphere(args: &Args) -> Result<Hemisphere, Box<dyn Error>> {
    let Some(path) = &args.prefs_db else {
        return Ok(args
            .hemisphere
            .or_else(|| args.latitude.map(Hemisphere::from_latitude))
            .unwrap_or_default());
    };

    let conn = open_prefs_db(path)?;
    let preference = HemispherePreference::new(SqlitePreferenceStore::new(&conn));
    if let Some(hemisphere) = args.hemisphere {
        preference.save(hemisphere)?;
        return Ok(hemisphere);
    }
    Ok(preference.resolve(args.latitude)?.hemisphere)
}

fn load_reading(args: &Args) -> Result<(MoonReading, bool), Box<dyn Error>> {
    let Some(path) = &args.moon_payload else {
        let illumination = args
            .illumination
            .as_deref()
            .and_then(alignment_core::model::reading::parse_illumination);
        let reading = MoonReading::sanitized(
            args.phase.as_deref(),
            illumination,
            args.moon_name.as_deref(),
        );
        return Ok((reading, false));
    };

    let body = std::fs::read_to_string(path)?;
    match parse_farmsense_payload(&body) {
        Ok(reading) => Ok((reading, false)),
        Err(err) => {
            warn!("event=moon_feed_fallback module=cli status=error error={err}");
            eprintln!("alignment: moon data unavailable: {err}");
            Ok((MoonReading::unknown(), true))
        }
    }
}
