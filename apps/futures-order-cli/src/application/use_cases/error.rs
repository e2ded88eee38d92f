//! Order workflow errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::application::ports::ExchangeError;
use crate::domain::order_entry::ValidationError;

/// Anything that can stop an order between raw input and exchange answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderWorkflowError {
    /// Parameters were rejected before any network call.
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// The pre-trade guard found too little of the quote asset.
    #[error("Insufficient {asset} balance: available {available}, required {required}")]
    InsufficientBalance {
        /// Quote asset checked.
        asset: String,
        /// Balance on the account.
        available: Decimal,
        /// Requested quantity.
        required: Decimal,
    },

    /// The exchange call failed.
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}
