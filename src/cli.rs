use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::ShellConfig;
use crate::logging::{self, LogConfig, LogDestination, LogFormat};

/// String Queue Shell
#[derive(Parser, Debug)]
#[command(name = "strqueue")]
#[command(about = "Drive a linked string queue from a command script or stdin")]
#[command(version)]
pub struct Args {
    /// Command script to run (reads stdin when omitted)
    pub script: Option<PathBuf>,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Echo each command before running it
    #[arg(long)]
    pub echo: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        return Err(anyhow::anyhow!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        ));
    }

    if let Some(format) = &args.log_format {
        LogFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(level) = &args.log_file_level {
        logging::parse_log_level(level)?;
    }

    if args.log_file_level.is_some() && args.log_file.is_none() {
        return Err(anyhow::anyhow!(
            "--log-file-level requires --log-file to be specified"
        ));
    }

    Ok(())
}

/// Load the shell configuration and apply command line overrides
pub fn load_configuration(args: &Args) -> Result<ShellConfig> {
    let mut config = match &args.config_file {
        Some(path) => ShellConfig::load_from_file(path)?,
        None => ShellConfig::load()?,
    };

    if args.echo {
        config.echo = true;
    }

    Ok(config)
}

/// Combine flags and configuration into the logger setup
pub fn configure_logging(args: &Args, config: &ShellConfig) -> Result<LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        logging::parse_log_level(&config.log.console_level)
            .context("Invalid console_level in [log] configuration")?
    };

    let format = match &args.log_format {
        Some(format) => LogFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?,
        None => config.log.format,
    };

    let log_file = args.log_file.clone().or_else(|| config.log.file.clone());

    let file_level = match (&args.log_file_level, &config.log.file_level) {
        (Some(level), _) | (None, Some(level)) => Some(logging::parse_log_level(level)?),
        (None, None) => None,
    };

    let (destination, file_level) = match log_file {
        Some(path) if config.log.console => {
            (LogDestination::Both(path), Some(file_level.unwrap_or(LevelFilter::Info)))
        }
        Some(path) => (LogDestination::File(path), Some(file_level.unwrap_or(LevelFilter::Info))),
        None => (LogDestination::Console, None),
    };

    debug!(
        "Logging: console {:?}, file {:?}, format {:?}",
        console_level, file_level, format
    );

    Ok(LogConfig {
        console_level,
        file_level,
        format,
        destination,
    })
}
