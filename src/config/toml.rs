//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Configuration file contents.
///
/// Keys are PascalCase (`AppToken`, `DestKey`, `Title`). All fields are
/// optional here; required fields are enforced when merging into
/// [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "PascalCase")]
pub struct TomlConfig {
    /// Token identifying the sending application
    pub app_token: Option<String>,

    /// Key selecting the destination user or group
    pub dest_key: Option<String>,

    /// Title to show with messages, instead of the application name
    pub title: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates an empty configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Pushover configuration file
# API documentation: https://pushover.net/api

# Token identifying the sending application (required)
AppToken = ""

# Key selecting the destination user or group (required)
DestKey = ""

# Title to show with message, instead of application name (optional)
# Overridden by the --title flag.
# Title = ""
"#
    .to_string()
}
