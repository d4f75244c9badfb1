mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli_modes::TallyCli;
use std::process::ExitCode;
use tally_core::Tally;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tally: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let tally = match &cli.config {
        Some(path) => Tally::from_config_file(path)?,
        None => Tally::new()?,
    };
    let tally_cli = TallyCli::new(cli, tally);
    tally_cli.run()
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
