//! Command-line interface for the itinerary prettifier
//! Expands the airport, date and time markup of an itinerary into a plain-text file.
//!
//! Usage:
//!   itinerary `<input>` `<output>` [`<airport-lookup>`]   - Prettify an itinerary
//!   itinerary `<input>` `<output>` --config `<file>`      - Layer a TOML config over the defaults
//!
//! An `itinerary.toml` in the working directory is picked up when present;
//! `--config` is layered over it.
//!
//! The output file is only written once the whole itinerary has been expanded.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use itinerary_config::{ItineraryConfig, Loader};
use itinerary_core::itinerary::loader::{ensure_exists, load_directory, write_output};
use itinerary_core::itinerary::{ExpandOptions, InputKind, ItineraryLoader, Prettifier};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "itinerary.toml";

fn cli() -> Command {
    Command::new("itinerary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prettify travel itineraries: expands airport codes, dates and times")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the itinerary to prettify")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path the prettified itinerary is written to")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("airport-lookup")
                .help("Path to the airport lookup CSV (defaults to reference.default_path)")
                .index(3),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    if let Err(e) = run(&matches, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<ItineraryConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(level) = verbosity_level(matches.get_count("verbose")) {
        loader = loader
            .set_override("logging.level", level)
            .context("Invalid verbosity")?;
    }
    loader.build().context("Invalid configuration")
}

fn verbosity_level(count: u8) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over the configured level
fn init_logging(config: &ItineraryConfig) {
    let level = config.logging.level.as_str();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle a prettify run
fn run(matches: &ArgMatches, config: &ItineraryConfig) -> Result<()> {
    let input = PathBuf::from(required(matches, "input")?);
    let output = PathBuf::from(required(matches, "output")?);
    let lookup = matches
        .get_one::<String>("airport-lookup")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.reference.default_path));

    ensure_exists(&input, InputKind::Itinerary)?;
    ensure_exists(&lookup, InputKind::AirportLookup)?;

    debug!(lookup = %lookup.display(), "loading airport directory");
    let directory = Arc::new(load_directory(&lookup)?);

    let options = ExpandOptions {
        collapse_blank_lines: config.output.collapse_blank_lines,
    };
    let prettifier = Prettifier::with_options(directory, options);
    let lines = ItineraryLoader::from_path(&input)?.prettify(&prettifier);

    write_output(&output, &lines, config.output.trailing_newline)?;
    info!(output = %output.display(), lines = lines.len(), "itinerary written");
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("missing required argument <{}>", name))
}
