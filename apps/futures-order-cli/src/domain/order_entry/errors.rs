//! Order validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

use super::value_objects::OrderType;

/// Errors raised while turning raw user input into an [`OrderRequest`].
///
/// All of these are detected locally, before any exchange call.
///
/// [`OrderRequest`]: super::OrderRequest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Symbol is empty or malformed.
    #[error("invalid symbol '{symbol}': {reason}")]
    InvalidSymbol {
        /// The normalized symbol.
        symbol: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Side is neither BUY nor SELL.
    #[error("side must be BUY or SELL, got '{side}'")]
    InvalidSide {
        /// The rejected input.
        side: String,
    },

    /// Order type is not one of MARKET, LIMIT, STOP-LIMIT.
    #[error("unsupported order type '{order_type}'. Use MARKET, LIMIT, or STOP-LIMIT")]
    UnsupportedOrderType {
        /// The rejected input.
        order_type: String,
    },

    /// LIMIT order without a limit price.
    #[error("limit price required for LIMIT order")]
    MissingPrice,

    /// STOP-LIMIT order without both prices.
    #[error("both price and stop price required for STOP-LIMIT order")]
    MissingStopParams,

    /// A price field was supplied that the order type does not take.
    #[error("{field} is not allowed on {order_type} orders")]
    UnexpectedPriceField {
        /// The order type being built.
        order_type: OrderType,
        /// The superfluous field.
        field: &'static str,
    },

    /// Quantity is zero or negative.
    #[error("quantity must be greater than 0, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: Decimal,
    },

    /// A price is zero or negative.
    #[error("{field} must be greater than 0, got {value}")]
    InvalidPrice {
        /// Which price field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
}
