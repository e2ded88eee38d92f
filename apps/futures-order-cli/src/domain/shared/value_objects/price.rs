//! Price value object for limit and trigger prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::order_entry::ValidationError;

/// A strictly positive price quoted in the instrument's quote asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a validated Price.
    ///
    /// `field` names the input the value came from ("price" or
    /// "stop_price") so the error points at the right prompt.
    pub fn try_new(amount: Decimal, field: &'static str) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice {
                field,
                value: amount,
            });
        }
        Ok(Self(amount))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
