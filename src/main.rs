use anyhow::{Context, Result};
use log::error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

use strqueue::cli;
use strqueue::logging;
use strqueue::shell::{SessionSummary, Shell};

fn main() {
    match run() {
        Ok(summary) if summary.succeeded() => {}
        Ok(summary) => {
            eprintln!(
                "{} of {} commands failed",
                summary.failures, summary.commands
            );
            process::exit(1);
        }
        Err(e) => {
            error!("Application error: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<SessionSummary> {
    let args = cli::parse_args();
    cli::validate_args(&args)?;

    let config = cli::load_configuration(&args)?;
    let log_config = cli::configure_logging(&args, &config)?;
    logging::init_logger(log_config)?;

    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdout.lock());

    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            shell.run(BufReader::new(file))
        }
        None => shell.run(io::stdin().lock()),
    }
    .context("Shell session aborted")?;

    let mut stdout = shell.into_output();
    stdout.flush().context("Failed to flush output")?;
    Ok(summary)
}
