//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use pushover::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use pushover::config::ConfigError;

    /// Success (exit code 0), also used after `--printconfig`.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Failure (exit code 1) - config file, request, network or API error.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;

    /// Usage error (exit code 2), matching clap's own exit status.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn usage() -> ExitCode {
        ExitCode::from(2)
    }

    /// Picks the exit code for a configuration error.
    pub fn for_config_error(error: &ConfigError) -> ExitCode {
        if error.is_usage() { usage() } else { FAILURE }
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::APP_TOKEN || *f == field::DEST_KEY =>
        {
            eprintln!("\nRun 'pushover --printconfig' to see an example config file.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!(
                "\nRun 'pushover --printconfig' to see an example config file, \
                 or use --configpath to point at another one."
            );
        }
        _ => {}
    }
}

/// Renders an error followed by each cause not already in its message.
///
/// Wrapper errors often embed their source's text, so a cause is appended
/// only when the rendered text does not contain it yet.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr without timestamps so stdout stays reserved for
/// `--printconfig`.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
