//! Normalized order result.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw order response body as returned by the exchange.
pub type RawOrderResponse = Map<String, Value>;

/// The fields of an order response worth reporting.
///
/// Every field is optional: a key missing from the raw response stays
/// `None` and is left out when serialized. Nothing is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    /// Exchange order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Order status, e.g. "NEW" or "FILLED".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// "BUY" or "SELL".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Exchange order type, e.g. "STOP".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Average fill price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<Decimal>,
    /// Requested quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_qty: Option<Decimal>,
    /// Filled quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_qty: Option<Decimal>,
    /// Filled notional in the quote asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cum_quote: Option<Decimal>,
    /// Last update, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
}

impl OrderResult {
    /// Project a raw response onto the reported field set.
    ///
    /// Projection is per field: a present value that cannot be decoded is
    /// dropped with a warning instead of failing, since the order has
    /// already been accepted by the time this runs.
    #[must_use]
    pub fn from_raw(raw: &RawOrderResponse) -> Self {
        Self {
            order_id: project(raw, "orderId"),
            symbol: project(raw, "symbol"),
            status: project(raw, "status"),
            side: project(raw, "side"),
            order_type: project(raw, "type"),
            price: project(raw, "price"),
            avg_price: project(raw, "avgPrice"),
            orig_qty: project(raw, "origQty"),
            executed_qty: project(raw, "executedQty"),
            cum_quote: project(raw, "cumQuote"),
            update_time: project(raw, "updateTime"),
        }
    }

    /// Pretty-printed JSON for console output.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

fn project<T: DeserializeOwned>(raw: &RawOrderResponse, key: &str) -> Option<T> {
    let value = raw.get(key).filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(field = key, value = %value, error = %e, "Dropping undecodable order field");
            None
        }
    }
}
