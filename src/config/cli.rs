//! CLI argument parsing using clap.
//!
//! Defines the command-line interface: flags that shape the notification
//! and the positional words forming the message.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;

use crate::notify::Priority;

use super::defaults;
use super::duration::parse_duration;

/// Send a notification through the Pushover API.
///
/// Credentials are read from the config file; run with --printconfig to
/// see an example.
///
/// Example: pushover --priority high --title 'Bad stuff' 'There has been an unfortunate incident.'
#[derive(Debug, Parser)]
#[command(name = "pushover")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print an empty config file and exit
    #[arg(long = "printconfig")]
    pub print_config: bool,

    /// Path to config file
    #[arg(long = "configpath", value_name = "PATH", default_value = defaults::CONFIG_PATH)]
    pub config_path: PathBuf,

    /// Priority to send with: lowest, low, normal (default), high, highest, or -2..2
    #[arg(long, value_parser = parse_priority, allow_negative_numbers = true)]
    pub priority: Option<Priority>,

    /// Title to show with the message, instead of the config file value or the application name
    #[arg(long)]
    pub title: Option<String>,

    /// Seconds between resends of highest priority notifications until acknowledged
    #[arg(long, value_name = "SECS", default_value_t = defaults::RETRY_SECS)]
    pub retry: u32,

    /// Seconds after which highest priority notifications are no longer resent
    #[arg(long, value_name = "SECS", default_value_t = defaults::EXPIRE_SECS)]
    pub expire: u32,

    /// Timeout for the call to the Pushover API (e.g. 30s, 1m30s)
    #[arg(long, value_name = "DURATION", default_value = defaults::TIMEOUT, value_parser = parse_duration)]
    pub timeout: Duration,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Message to send; multiple words are joined with single spaces
    #[arg(value_name = "MESSAGE", required_unless_present = "print_config")]
    pub message: Vec<String>,
}

/// Returns the process exit status for a clap parse outcome.
///
/// Help is treated as a usage error (status 2); everything else keeps
/// clap's own status.
#[must_use]
pub fn usage_exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp => 2,
        _ => error.exit_code(),
    }
}

fn parse_priority(s: &str) -> Result<Priority, crate::notify::ParsePriorityError> {
    s.parse()
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// Usage errors and `--help` print to stderr and exit with status 2.
    /// `--version` prints to stdout and exits 0.
    #[must_use]
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                eprint!("{}", e.render());
                std::process::exit(usage_exit_code(&e));
            }
            Err(e) => e.exit(),
        }
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the message words joined with single spaces.
    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.join(" ")
    }
}
