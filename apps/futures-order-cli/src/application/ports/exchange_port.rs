//! Exchange Port (Driven Port)
//!
//! Interface for the authenticated exchange client: catalog, balances and
//! order entry.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::account::AssetBalance;
use crate::domain::market::ExchangeInfo;
use crate::domain::order_entry::{
    OrderKind, OrderRequest, OrderSide, RawOrderResponse, TimeInForce,
};
use crate::domain::shared::Symbol;

/// Order kind as the exchange names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayloadOrderType {
    /// Market order.
    Market,
    /// Limit order.
    Limit,
    /// Stop order with a limit price (the exchange's stop-limit).
    Stop,
}

impl PayloadOrderType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
        }
    }
}

/// Response detail the exchange should send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseType {
    /// Final order state only, no execution report list.
    #[default]
    Result,
}

impl ResponseType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Result => "RESULT",
        }
    }
}

/// Order payload handed to the exchange.
///
/// Serializes to the exchange's parameter names; absent prices are
/// omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Instrument.
    pub symbol: Symbol,
    /// Side.
    pub side: OrderSide,
    /// Exchange order kind.
    #[serde(rename = "type")]
    pub order_type: PayloadOrderType,
    /// Quantity.
    pub quantity: Decimal,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Trigger price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Time in force (resting orders only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Milliseconds the request stays valid after its timestamp.
    pub recv_window: u64,
    /// Requested response detail.
    #[serde(rename = "newOrderRespType")]
    pub response_type: ResponseType,
}

impl OrderPayload {
    /// Shape a validated request into the exchange payload.
    #[must_use]
    pub fn from_request(request: &OrderRequest, recv_window: u64) -> Self {
        let (order_type, price, stop_price, time_in_force) = match *request.kind() {
            OrderKind::Market => (PayloadOrderType::Market, None, None, None),
            OrderKind::Limit { price } => (
                PayloadOrderType::Limit,
                Some(price.amount()),
                None,
                Some(TimeInForce::Gtc),
            ),
            OrderKind::StopLimit { price, stop_price } => (
                PayloadOrderType::Stop,
                Some(price.amount()),
                Some(stop_price.amount()),
                Some(TimeInForce::Gtc),
            ),
        };

        Self {
            symbol: request.symbol().clone(),
            side: request.side(),
            order_type,
            quantity: request.quantity().amount(),
            price,
            stop_price,
            time_in_force,
            recv_window,
            response_type: ResponseType::Result,
        }
    }
}

/// Exchange port error.
///
/// Adapters map their own failures onto these two cases and the order
/// workflow passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The exchange answered and refused the request.
    #[error("Exchange rejected request (code {code}): {message}")]
    Rejected {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// The request did not complete or the answer was unreadable.
    #[error("Exchange transport error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },
}

/// Port for exchange interactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangePort: Send + Sync {
    /// Fetch the instrument catalog.
    async fn exchange_info(&self) -> Result<ExchangeInfo, ExchangeError>;

    /// Fetch every asset balance on the futures account.
    async fn balances(&self) -> Result<Vec<AssetBalance>, ExchangeError>;

    /// Submit an order and return the raw response body.
    async fn create_order(&self, payload: OrderPayload)
    -> Result<RawOrderResponse, ExchangeError>;
}
