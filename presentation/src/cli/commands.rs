//! CLI command definitions

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// CLI arguments for consultation-assistant
#[derive(Parser, Debug)]
#[command(name = "consultation-assistant")]
#[command(author, version, about = "Turn consultation notes into a professional summary")]
#[command(long_about = r#"
Consultation Assistant sends a patient's consultation notes to the summary
service and streams the generated document to the terminal as it is written.

The summary covers the medical record, follow-up action items and a
patient-friendly email. Press Ctrl-C to stop a summary in progress; the text
received so far stays on screen.

Configuration files are loaded from (in priority order):
1. CONSULT_<SECTION>__<KEY>   Environment variables
2. --config <path>            Explicit config file
3. ./consult.toml             Project-level config
4. ~/.config/consultation-assistant/config.toml   Global config

Example:
  consultation-assistant --patient "Jane Doe" --notes "BP 120/80, follow-up in 2 weeks"
  consultation-assistant --patient "Jane Doe" --date 2024-01-15 --notes-file visit.txt
"#)]
#[command(group(
    ArgGroup::new("notes_source")
        .args(["notes", "notes_file"])
        .multiple(false)
))]
pub struct Cli {
    /// Patient name
    #[arg(short, long, value_name = "NAME", required_unless_present = "show_config")]
    pub patient: Option<String>,

    /// Date of visit as YYYY-MM-DD (defaults to today)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Consultation notes
    #[arg(short, long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Read consultation notes from a file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub notes_file: Option<PathBuf>,

    /// Summary service endpoint (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Seconds without any data before the summary is abandoned (overrides config)
    #[arg(long, value_name = "SECS")]
    pub idle_timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
