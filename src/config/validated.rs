//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::time::Duration;

use crate::notify::Priority;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration for one notification.
///
/// Credentials come from the config file, everything else from the command
/// line. The title is the only value both sources can provide.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to read the config file named by the CLI,
/// or [`ValidatedConfig::from_raw`] with an already parsed file.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Application token (required, from config file)
    pub app_token: String,

    /// Destination user or group key (required, from config file)
    pub dest_key: String,

    /// Effective title: `--title`, else the config file, else none
    pub title: Option<String>,

    /// Message text, joined from the positional words
    pub message: String,

    /// Notification priority
    pub priority: Priority,

    /// Re-delivery interval in seconds for highest priority
    pub retry: u32,

    /// Re-delivery cutoff in seconds for highest priority
    pub expire: u32,

    /// Deadline for the API call
    pub timeout: Duration,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ priority: {}, title: {}, retry: {}s, expire: {}s, timeout: {}ms, message_len: {} }}",
            self.priority,
            self.title.as_deref().unwrap_or("none"),
            self.retry,
            self.expire,
            self.timeout.as_millis(),
            self.message.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No message words were given
    /// - `AppToken` or `DestKey` is missing or empty
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let message = cli.message_text();
        if message.is_empty() {
            return Err(ConfigError::missing(
                field::MESSAGE,
                "Pass the message text as positional arguments",
            ));
        }

        let app_token = required(
            toml.and_then(|t| t.app_token.as_deref()),
            field::APP_TOKEN,
            "Set AppToken in the config file",
        )?;
        let dest_key = required(
            toml.and_then(|t| t.dest_key.as_deref()),
            field::DEST_KEY,
            "Set DestKey in the config file",
        )?;

        let title = Self::resolve_title(cli, toml);

        Ok(Self {
            app_token,
            dest_key,
            title,
            message,
            priority: cli.priority.unwrap_or_default(),
            retry: cli.retry,
            expire: cli.expire,
            timeout: cli.timeout,
        })
    }

    /// Loads the config file at `cli.config_path` and merges it with the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = TomlConfig::load(&cli.config_path)?;

        Self::from_raw(cli, Some(&toml))
    }

    fn resolve_title(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        // CLI takes precedence, empty counts as unset
        cli.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| toml.and_then(|t| t.title.as_deref()))
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
    }
}

// Helper functions

fn required(
    value: Option<&str>,
    name: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| ConfigError::missing(name, hint))
}
