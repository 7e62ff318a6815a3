//! CLI argument definitions for the data standard report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "datastandard-report",
    version,
    about = "Flatten a data standard category tree into a report",
    long_about = "Flatten the category tree of a data standard document into one row per \
                  attribute link.\n\n\
                  Each row carries the category name, attribute name (with a '*' for \
                  mandatory links), description, rendered type and attribute groups."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the report for a category and everything below it.
    Report(ReportArgs),

    /// List the categories of a data standard.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Id of the category to report on.
    #[arg(value_name = "CATEGORY_ID")]
    pub category_id: String,

    /// Data standard document (default: $DATASTANDARD_PATH or the bundled sample).
    #[arg(long = "standard", value_name = "PATH")]
    pub standard: Option<PathBuf>,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Reject attribute types nested deeper than this.
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Data standard document (default: $DATASTANDARD_PATH or the bundled sample).
    #[arg(long = "standard", value_name = "PATH")]
    pub standard: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Table,
    Json,
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
