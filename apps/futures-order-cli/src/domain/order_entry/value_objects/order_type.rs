//! Order type as chosen by the user (market, limit, stop-limit).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_entry::ValidationError;

/// Order type specifying execution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute at best available price.
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop-limit order - becomes a limit order once the stop price trades.
    StopLimit,
}

impl OrderType {
    /// Parse user input.
    ///
    /// Accepts "market", "limit" and "stop-limit" in any case. "stop_limit"
    /// is accepted as well since that is how the type prints.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP-LIMIT" | "STOP_LIMIT" => Ok(Self::StopLimit),
            _ => Err(ValidationError::UnsupportedOrderType {
                order_type: raw.trim().to_string(),
            }),
        }
    }

    /// Returns true if this order type requires a limit price.
    #[must_use]
    pub const fn requires_limit_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// Returns true if this order type requires a stop price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        matches!(self, Self::StopLimit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("market", OrderType::Market ; "lower market")]
    #[test_case("MARKET", OrderType::Market ; "upper market")]
    #[test_case("Limit", OrderType::Limit ; "mixed limit")]
    #[test_case("stop-limit", OrderType::StopLimit ; "lower stop limit with hyphen")]
    #[test_case("STOP-LIMIT", OrderType::StopLimit ; "upper stop limit with hyphen")]
    #[test_case("stop_limit", OrderType::StopLimit ; "stop limit with underscore")]
    fn order_type_parse_accepts(raw: &str, expected: OrderType) {
        assert_eq!(OrderType::parse(raw).unwrap(), expected);
    }

    #[test_case("stop" ; "plain stop")]
    #[test_case("trailing-stop" ; "trailing stop")]
    #[test_case("" ; "empty")]
    fn order_type_parse_rejects(raw: &str) {
        assert!(matches!(
            OrderType::parse(raw),
            Err(ValidationError::UnsupportedOrderType { .. })
        ));
    }

    #[test]
    fn order_type_price_requirements() {
        assert!(!OrderType::Market.requires_limit_price());
        assert!(OrderType::Limit.requires_limit_price());
        assert!(OrderType::StopLimit.requires_limit_price());

        assert!(!OrderType::Market.requires_stop_price());
        assert!(!OrderType::Limit.requires_stop_price());
        assert!(OrderType::StopLimit.requires_stop_price());
    }

    #[test]
    fn order_type_display() {
        assert_eq!(format!("{}", OrderType::Market), "MARKET");
        assert_eq!(format!("{}", OrderType::Limit), "LIMIT");
        assert_eq!(format!("{}", OrderType::StopLimit), "STOP_LIMIT");
    }
}
