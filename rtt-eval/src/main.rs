use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rtt_eval::runner::{self, PathOutcome};
use rtt_eval::{Cli, Config};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.paths.is_empty() {
        Cli::command()
            .print_help()
            .context("Failed to print usage")?;
        return Ok(ExitCode::SUCCESS);
    }

    // Load config and apply CLI overrides
    let mut config = Config::load_from(cli.config.as_deref())?;
    cli.apply_to_config(&mut config);

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    let mut totals = PathOutcome::default();
    for path in &cli.paths {
        match runner::process_path(path, &config, cli.verbose) {
            Ok(outcome) => totals.absorb(outcome),
            // A dead report stream kills the current path only; the
            // remaining arguments still get their own results files.
            Err(err) => eprintln!("Failed to process '{}': {}", path.display(), err),
        }
    }

    println!("Done");

    if totals.processed == 0 {
        eprintln!("no measurement logs were successfully processed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
