//! Message priority tiers accepted by the Pushover API.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Urgency tier attached to a notification.
///
/// Each tier maps to a fixed integer code sent to the API. Only
/// [`Priority::Highest`] makes the service re-deliver the notification
/// until it is acknowledged, which is why it carries `retry` and `expire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Code -2: no notification is generated on the device.
    Lowest,
    /// Code -1: delivered quietly.
    Low,
    /// Code 0: the API's default.
    #[default]
    Normal,
    /// Code 1: bypasses quiet hours.
    High,
    /// Code 2: repeated until acknowledged.
    Highest,
}

/// Error returned when a priority token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid priority value {value:?}: expected lowest, low, normal, high, highest or -2..2")]
pub struct ParsePriorityError {
    /// The rejected input
    pub value: String,
}

impl Priority {
    /// All tiers, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Lowest,
        Self::Low,
        Self::Normal,
        Self::High,
        Self::Highest,
    ];

    /// Returns the numeric code sent to the API.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Lowest => -2,
            Self::Low => -1,
            Self::Normal => 0,
            Self::High => 1,
            Self::Highest => 2,
        }
    }

    /// Returns the symbolic name of this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Highest => "highest",
        }
    }

    /// Returns true if the remote service keeps re-sending until acknowledged.
    #[must_use]
    pub const fn requires_acknowledgement(self) -> bool {
        matches!(self, Self::Highest)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// Parses a symbolic name or numeric code. Matching is exact and
    /// case-sensitive; the empty string means [`Priority::Normal`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowest" | "-2" => Ok(Self::Lowest),
            "low" | "-1" => Ok(Self::Low),
            "" | "normal" | "0" => Ok(Self::Normal),
            "high" | "1" => Ok(Self::High),
            "highest" | "2" => Ok(Self::Highest),
            _ => Err(ParsePriorityError {
                value: s.to_string(),
            }),
        }
    }
}
