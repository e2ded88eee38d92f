//! Symbol value object for futures instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_entry::ValidationError;

/// Longest symbol the exchange lists (e.g. "1000SHIBUSDT_250328").
const MAX_SYMBOL_LEN: usize = 32;

/// A trading pair identifier such as "BTCUSDT".
///
/// Normalized to uppercase with surrounding whitespace removed, so
/// "btcusdt" and " BTCUSDT " compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the symbol for order submission.
    ///
    /// Futures symbols are alphanumeric, with `_` separating the delivery
    /// date on quarterly contracts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let reason = if self.0.is_empty() {
            "symbol cannot be empty"
        } else if self.0.len() > MAX_SYMBOL_LEN {
            "symbol exceeds maximum length"
        } else if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            "symbol contains invalid characters"
        } else {
            return Ok(());
        };

        Err(ValidationError::InvalidSymbol {
            symbol: self.0.clone(),
            reason: reason.to_string(),
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case_and_whitespace() {
        let s = Symbol::new("  btcusdt ");
        assert_eq!(s.as_str(), "BTCUSDT");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("ETHUSDT");
        assert_eq!(format!("{s}"), "ETHUSDT");
    }

    #[test]
    fn symbol_validate_empty() {
        let err = Symbol::new("   ").validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSymbol { .. }));
    }

    #[test]
    fn symbol_validate_too_long() {
        assert!(Symbol::new("A".repeat(40)).validate().is_err());
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        assert!(Symbol::new("BTC-USDT").validate().is_err());
        assert!(Symbol::new("BTC USDT").validate().is_err());
    }

    #[test]
    fn symbol_validate_valid() {
        assert!(Symbol::new("BTCUSDT").validate().is_ok());
        assert!(Symbol::new("1000PEPEUSDT").validate().is_ok());
        assert!(Symbol::new("BTCUSDT_250328").validate().is_ok());
    }

    #[test]
    fn symbol_serde_is_transparent() {
        let s = Symbol::new("BTCUSDT");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"BTCUSDT\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn symbol_hash_ignores_input_case() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Symbol::new("BTCUSDT"));
        set.insert(Symbol::new("ETHUSDT"));
        set.insert(Symbol::new("btcusdt"));

        assert_eq!(set.len(), 2);
    }
}
