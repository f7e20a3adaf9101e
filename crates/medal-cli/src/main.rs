//! Medal analytics CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use medal_cli::logging::{LogConfig, LogFormat, init_logging};
use medal_cli::render::{OutputFormat, Renderer};
use medal_core::QueryError;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::run;

/// Exit code for unreadable or malformed input tables.
const EXIT_LOAD_ERROR: i32 = 1;
/// Exit code for filter values outside the dataset's domain.
const EXIT_INVALID_FILTER: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_LOAD_ERROR);
    }
    let exit_code = match run(&cli, renderer_from_cli(&cli)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            if error.downcast_ref::<QueryError>().is_some() {
                EXIT_INVALID_FILTER
            } else {
                EXIT_LOAD_ERROR
            }
        }
    };
    std::process::exit(exit_code);
}

fn renderer_from_cli(cli: &Cli) -> Renderer {
    let format = match cli.format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let styled = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    Renderer::new(format).with_styling(styled)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
