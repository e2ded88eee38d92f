//! Time in force for resting orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time in force specifying order validity duration.
///
/// Only good-til-canceled is placed by this client; market orders carry no
/// time in force at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good-til-canceled: rests until filled or explicitly cancelled.
    #[default]
    Gtc,
}

impl TimeInForce {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
