//! Configuration layer for pushover.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - The documented empty config file ([`default_config_template`])
//! - Duration flag parsing ([`parse_duration`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Credentials (`AppToken`, `DestKey`) are only read from the config file.
//! Priority, retry, expire, timeout and the message only come from the
//! command line. The title may come from either:
//!
//! 1. **`--title`** - if given and non-empty
//! 2. **`Title` in the config file** - if non-empty
//! 3. **Omitted** - the API then shows the application name
//!
//! # Retry and Expire
//!
//! `--retry` and `--expire` are instructions to the remote service for
//! re-delivering highest priority notifications. This program never
//! retries a request itself.

mod cli;
pub mod defaults;
mod duration;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, usage_exit_code};
pub use duration::parse_duration;
pub use error::{ConfigError, field};
pub use self::toml::{TomlConfig, default_config_template};
pub use validated::ValidatedConfig;
