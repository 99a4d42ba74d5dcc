//! Pushover: send a notification from the command line
//!
//! A library for resolving notification settings from a config file and
//! command-line flags, and posting them to the Pushover messages API.

pub mod config;
pub mod notify;
