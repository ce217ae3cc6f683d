//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initialises logging, then dispatches to
//! a handler with the composed probe.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use devprobe_cli::{Cli, CliError, Commands, bootstrap, handlers};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let probe = bootstrap(&cli)?;

    match command {
        Commands::List { json } => handlers::list::execute(&probe, *json)?,
        Commands::Env => handlers::env::execute(&probe)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
