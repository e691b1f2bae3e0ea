// pathtrack_sim/src/main.rs

use std::process::ExitCode;

use clap::Parser;
use pathtrack_sim::cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pathtrack_core=info,pathtrack_sim=info")),
        )
        .init();

    let cli = Cli::parse();
    match pathtrack_sim::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
