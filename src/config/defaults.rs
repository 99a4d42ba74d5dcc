//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default location of the configuration file.
pub const CONFIG_PATH: &str = "/etc/pushover.conf";

/// Default interval in seconds between re-deliveries of a highest priority
/// notification. The service attempts at most 50 re-deliveries.
pub const RETRY_SECS: u32 = 300;

/// Default period in seconds after which a highest priority notification
/// is no longer re-delivered.
pub const EXPIRE_SECS: u32 = 3600;

/// Default timeout for the API call, in the `--timeout` flag syntax.
pub const TIMEOUT: &str = "30s";
