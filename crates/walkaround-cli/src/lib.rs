//! Walkaround command-line front-end
//!
//! Thin glue over the library crates: reads and writes assessment records,
//! prints scores, runs auto-fill, writes the two HTML documents and prints
//! the email draft.
//!
//! Command output goes to the writer passed to [`run`]; logs go to stderr.

#![warn(unreachable_pub)]

mod commands;
pub mod config;

pub use config::{ConfigError, WalkaroundConfig};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use walkaround_schema::Schema;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Assessment record (JSON)")
}

/// Command-line definition
#[must_use]
pub fn cli() -> Command {
    Command::new("walkaround")
        .version(VERSION)
        .about("Lean walkaround diagnostic: scoring, debrief auto-fill and reports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("schema")
                .long("schema")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Questionnaire file (YAML or JSON) instead of the built-in one"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (repeatable)"),
        )
        .subcommand(
            Command::new("new")
                .about("Write a fresh empty assessment record")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output file (default: stdout)"),
                )
                .arg(Arg::new("customer").long("customer").help("Customer name"))
                .arg(Arg::new("site").long("site").help("Site name"))
                .arg(Arg::new("date").long("date").help("Visit date (YYYY-MM-DD)")),
        )
        .subcommand(
            Command::new("score")
                .about("Print group, section and overall scores")
                .arg(file_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("autofill")
                .about("Fill blank debrief fields from the scores")
                .arg(file_arg())
                .arg(
                    Arg::new("write")
                        .long("write")
                        .action(ArgAction::SetTrue)
                        .help("Write the result back to FILE instead of printing it"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Write the diagnostic and executive debrief documents")
                .arg(file_arg())
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory for the documents"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Date used when the record has none (YYYY-MM-DD, default: local date)"),
                ),
        )
        .subcommand(
            Command::new("email")
                .about("Print the follow-up email draft")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("schema")
                .about("Print the questionnaire or the record JSON Schema")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("yaml")
                        .value_parser(["yaml", "json"])
                        .help("Questionnaire output format"),
                )
                .arg(
                    Arg::new("record")
                        .long("record")
                        .action(ArgAction::SetTrue)
                        .help("Print the JSON Schema of assessment records instead"),
                ),
        )
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks warn, info, debug or
/// trace.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Schema and configuration shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    schema: Arc<Schema>,
    config: WalkaroundConfig,
}

impl Session {
    /// Session from already-loaded parts
    #[must_use]
    pub fn new(schema: Schema, config: WalkaroundConfig) -> Self {
        Self {
            schema: Arc::new(schema),
            config,
        }
    }

    /// Load the questionnaire and configuration named by the global flags
    ///
    /// # Errors
    /// Returns error if either file cannot be read or parsed
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let schema = match matches.get_one::<PathBuf>("schema") {
            Some(path) => Schema::load(path)
                .with_context(|| format!("loading questionnaire {}", path.display()))?,
            None => Schema::builtin(),
        };
        let config = match matches.get_one::<PathBuf>("config") {
            Some(path) => WalkaroundConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WalkaroundConfig::default(),
        };
        Ok(Self::new(schema, config))
    }

    /// Questionnaire in use
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &WalkaroundConfig {
        &self.config
    }
}

/// Run the parsed command line, writing command output to `out`
///
/// # Errors
/// Returns error if a file cannot be read or written, or a flag value is invalid
pub fn run(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let session = Session::from_matches(matches)?;
    match matches.subcommand() {
        Some(("new", args)) => commands::new(&session, args, out),
        Some(("score", args)) => commands::score(&session, args, out),
        Some(("autofill", args)) => commands::autofill(&session, args, out),
        Some(("render", args)) => commands::render(&session, args, out),
        Some(("email", args)) => commands::email(&session, args, out),
        Some(("schema", args)) => commands::schema(&session, args, out),
        _ => Ok(()),
    }
}
