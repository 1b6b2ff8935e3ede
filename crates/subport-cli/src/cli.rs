//! CLI argument definitions for the subscriber export converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use subport_model::ConversionOptions;

#[derive(Parser)]
#[command(
    name = "subport",
    version,
    about = "Convert MailChimp subscriber exports to ConvertKit import format",
    long_about = "Convert MailChimp subscriber exports to ConvertKit import format.\n\n\
                  Maps columns, cleans tag lists, drops rows with invalid emails and\n\
                  removes duplicate subscribers (case-insensitive).",
    after_help = "Examples:\n  \
                  subport subscribers.csv\n  \
                  subport subscribers.csv -o cleaned.csv\n  \
                  subport subscribers.csv --keep-duplicates --verbose\n  \
                  subport subscribers.csv --analyze-only"
)]
pub struct Cli {
    /// Path to the MailChimp export CSV file.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file path (default: <INPUT>_convertkit_ready.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep rows whose email repeats an earlier row.
    #[arg(long = "keep-duplicates")]
    pub keep_duplicates: bool,

    /// Only analyze the input file without converting.
    #[arg(long = "analyze-only")]
    pub analyze_only: bool,

    /// Adjust verbosity (-v lists every column and tag and logs progress,
    /// -vv adds skipped rows, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags for logging).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include subscriber emails in row-level log events.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// `-v` or more switches the report to full listings.
    pub fn verbose(&self) -> bool {
        self.verbosity.tracing_level_filter() > LevelFilter::WARN
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions::new()
            .with_output_path(self.output.clone())
            .with_keep_duplicates(self.keep_duplicates)
            .with_analyze_only(self.analyze_only)
            .with_verbose(self.verbose())
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
