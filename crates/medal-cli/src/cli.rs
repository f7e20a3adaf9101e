//! CLI argument definitions for the medal analytics binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medal_ingest::{DEFAULT_EVENTS_FILE, DEFAULT_REGIONS_FILE};
use medal_model::OVERALL;

#[derive(Parser)]
#[command(
    name = "medal",
    version,
    about = "Medal analytics over historical Summer Games results",
    long_about = "Medal tallies, participation trends and athlete rankings computed from\n\
                  an athlete events table and a NOC-to-region mapping table.\n\n\
                  Filter values must be one of those listed by `medal filters`;\n\
                  \"Overall\" means no constraint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Athlete events table (CSV).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EVENTS_FILE, global = true)]
    pub events: PathBuf,

    /// NOC-to-region mapping table (CSV).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REGIONS_FILE, global = true)]
    pub regions: PathBuf,

    /// Report output format.
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

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

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Medal tally by country, or by year for one country.
    Tally(TallyArgs),

    /// Headline statistics and participation trends.
    Overview(OverviewArgs),

    /// Year-wise medals, sport heatmap and top athletes of one country.
    Country(CountryArgs),

    /// Age, body measurement and sex participation views.
    Athletes(AthleteArgs),

    /// List the valid filter values.
    Filters,
}

#[derive(Parser)]
pub struct TallyArgs {
    /// Edition year, or "Overall".
    #[arg(long, default_value = OVERALL)]
    pub year: String,

    /// Country (region) name, or "Overall".
    #[arg(long, default_value = OVERALL)]
    pub country: String,
}

#[derive(Parser)]
pub struct OverviewArgs {
    /// Restrict the athlete ranking to one sport.
    #[arg(long, default_value = OVERALL)]
    pub sport: String,
}

#[derive(Parser)]
pub struct CountryArgs {
    /// Country (region) name.
    #[arg(long)]
    pub country: String,
}

#[derive(Parser)]
pub struct AthleteArgs {
    /// Restrict the height and weight rows to one sport.
    #[arg(long, default_value = OVERALL)]
    pub sport: String,

    /// Maximum number of height and weight rows to print.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// Report output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
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
