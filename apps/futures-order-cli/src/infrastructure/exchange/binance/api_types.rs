//! Binance futures REST request and response types.
//!
//! These types map directly to the exchange's wire format.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::OrderPayload;
use crate::domain::account::AssetBalance;
use crate::domain::market::{ExchangeInfo, Instrument};
use crate::domain::shared::Symbol;

/// Request paths.
pub mod paths {
    /// Instrument catalog (unsigned).
    pub const EXCHANGE_INFO: &str = "/fapi/v1/exchangeInfo";
    /// Account balances (signed).
    pub const BALANCE: &str = "/fapi/v2/balance";
    /// New order (signed).
    pub const ORDER: &str = "/fapi/v1/order";
}

// ============================================================================
// Order Request
// ============================================================================

/// Order parameters in the order the exchange documents them.
///
/// Absent prices are left out rather than sent empty.
#[must_use]
pub fn order_params(payload: &OrderPayload) -> Vec<(String, String)> {
    let mut params = vec![
        ("symbol".to_string(), payload.symbol.to_string()),
        ("side".to_string(), payload.side.as_str().to_string()),
        ("type".to_string(), payload.order_type.as_str().to_string()),
        ("quantity".to_string(), payload.quantity.to_string()),
    ];
    if let Some(price) = payload.price {
        params.push(("price".to_string(), price.to_string()));
    }
    if let Some(stop_price) = payload.stop_price {
        params.push(("stopPrice".to_string(), stop_price.to_string()));
    }
    if let Some(tif) = payload.time_in_force {
        params.push(("timeInForce".to_string(), tif.as_str().to_string()));
    }
    params.push(("recvWindow".to_string(), payload.recv_window.to_string()));
    params.push((
        "newOrderRespType".to_string(),
        payload.response_type.as_str().to_string(),
    ));
    params
}

// ============================================================================
// Response Types
// ============================================================================

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceErrorResponse {
    /// Binance error code, e.g. -2019.
    pub code: i64,
    /// Human-readable message.
    pub msg: String,
}

/// One entry of `GET /fapi/v2/balance`.
///
/// Only the wallet balance is read; the remaining fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceBalanceEntry {
    /// Asset code.
    pub asset: String,
    /// Wallet balance, sent as a string or a number.
    pub balance: Decimal,
}

impl From<BinanceBalanceEntry> for AssetBalance {
    fn from(entry: BinanceBalanceEntry) -> Self {
        Self::new(entry.asset, entry.balance)
    }
}

/// `GET /fapi/v1/exchangeInfo`, reduced to the symbol list.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceExchangeInfo {
    /// Listed contracts.
    #[serde(default)]
    pub symbols: Vec<BinanceSymbolInfo>,
}

/// One listed contract.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceSymbolInfo {
    /// Contract symbol.
    pub symbol: String,
}

impl From<BinanceExchangeInfo> for ExchangeInfo {
    fn from(info: BinanceExchangeInfo) -> Self {
        Self {
            symbols: info
                .symbols
                .into_iter()
                .map(|s| Instrument::new(Symbol::new(s.symbol)))
                .collect(),
        }
    }
}
