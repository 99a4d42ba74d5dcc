//! Pushover: send a notification from the command line
//!
//! Entry point for the pushover application.

use pushover::config::{Cli, ValidatedConfig, default_config_template};
use std::process::ExitCode;

mod app;
mod run;

use app::{error_chain, exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if cli.print_config {
        print!("{}", default_config_template());
        return exit_code::SUCCESS;
    }

    setup_tracing(cli.verbose);

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", error_chain(&e));
            print_config_hint(&e);
            return exit_code::for_config_error(&e);
        }
    };

    tracing::debug!("{config}");

    run_application(config)
}

/// Runs the delivery on a single-threaded runtime.
///
/// Excluded from coverage - performs a real network call.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::FAILURE;
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{}", error_chain(&e));
            exit_code::FAILURE
        }
    }
}
