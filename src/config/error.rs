//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from reading, parsing and validating the configuration
/// file, and from merging it with command-line arguments.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("parsing config file: failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("parsing config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid duration value (malformed or zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The application token from the config file.
    pub const APP_TOKEN: &str = "AppToken";
    /// The destination key from the config file.
    pub const DEST_KEY: &str = "DestKey";
    /// The message words from the command line.
    pub const MESSAGE: &str = "message";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    /// Returns true if the error stems from how the program was invoked
    /// rather than from the configuration file.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        match self {
            Self::MissingRequired { field: f, .. } => *f == field::MESSAGE,
            Self::InvalidDuration { .. } => true,
            Self::FileRead { .. } | Self::TomlParse(_) => false,
        }
    }
}
