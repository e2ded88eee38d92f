//! Order Workflow Use Case
//!
//! Validate → Guard (BUY only) → Build Payload → Dispatch → Normalize.
//! Each submission is a single shot; nothing is retained between calls.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

use super::balance_guard::BalanceGuard;
use super::error::OrderWorkflowError;
use crate::application::ports::{
    Endpoint, ExchangeError, ExchangeLogEntry, ExchangeLogPort, ExchangePort, OrderPayload,
};
use crate::domain::account::{BalanceSnapshot, DEFAULT_QUOTE_ASSET};
use crate::domain::order_entry::{OrderParams, OrderRequest, OrderResult, ValidationError};
use crate::domain::shared::Symbol;

/// Receive window sent with every order, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;

/// Operational settings for the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWorkflowConfig {
    /// Asset the balance guard checks.
    pub quote_asset: String,
    /// Receive window attached to order payloads.
    pub recv_window_ms: u64,
}

impl Default for OrderWorkflowConfig {
    fn default() -> Self {
        Self {
            quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

/// Turns raw order parameters into exchange orders.
pub struct OrderWorkflow<E, L>
where
    E: ExchangePort,
    L: ExchangeLogPort,
{
    exchange: Arc<E>,
    log: Arc<L>,
    guard: BalanceGuard,
    recv_window_ms: u64,
}

impl<E, L> OrderWorkflow<E, L>
where
    E: ExchangePort,
    L: ExchangeLogPort,
{
    /// Create a new workflow over an exchange client and an exchange log.
    pub fn new(exchange: Arc<E>, log: Arc<L>, config: OrderWorkflowConfig) -> Self {
        Self {
            exchange,
            log,
            guard: BalanceGuard::new(config.quote_asset),
            recv_window_ms: config.recv_window_ms,
        }
    }

    /// Validate raw parameters into an order request. No network access.
    pub fn build_and_validate(&self, params: &OrderParams) -> Result<OrderRequest, ValidationError> {
        OrderRequest::build(params)
    }

    /// Submit a validated order.
    ///
    /// BUY orders are checked against the quote asset balance first. Exchange
    /// failures are logged and returned unchanged.
    pub async fn submit(&self, request: &OrderRequest) -> Result<OrderResult, OrderWorkflowError> {
        if self.guard.applies_to(request) {
            let snapshot = self.fetch_balances(self.guard.quote_asset()).await?;
            if let Err(e) = self.guard.check(request, &snapshot) {
                tracing::warn!(
                    symbol = %request.symbol(),
                    quantity = %request.quantity(),
                    error = %e,
                    "Order blocked by balance guard"
                );
                return Err(e);
            }
        }

        let payload = OrderPayload::from_request(request, self.recv_window_ms);
        self.log
            .record(ExchangeLogEntry::request(Endpoint::Order, to_body(&payload)));

        let raw = self
            .exchange
            .create_order(payload)
            .await
            .map_err(|e| self.failed(Endpoint::Order, e))?;
        self.log.record(ExchangeLogEntry::response(
            Endpoint::Order,
            Value::Object(raw.clone()),
        ));

        let result = OrderResult::from_raw(&raw);
        tracing::info!(
            order_id = ?result.order_id,
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.order_type(),
            status = ?result.status,
            "Order placed"
        );

        Ok(result)
    }

    /// Validate and submit in one step.
    pub async fn place(&self, params: &OrderParams) -> Result<OrderResult, OrderWorkflowError> {
        let request = self.build_and_validate(params)?;
        self.submit(&request).await
    }

    /// Tradable symbols, in catalog order.
    pub async fn list_symbols(&self) -> Result<Vec<Symbol>, ExchangeError> {
        self.log
            .record(ExchangeLogEntry::request(Endpoint::ExchangeInfo, Value::Null));

        let info = self
            .exchange
            .exchange_info()
            .await
            .map_err(|e| self.failed(Endpoint::ExchangeInfo, e))?;
        let symbols = info.into_symbols();

        self.log.record(ExchangeLogEntry::response(
            Endpoint::ExchangeInfo,
            json!({ "symbols": symbols }),
        ));
        Ok(symbols)
    }

    /// Balance of one asset, zero when the account does not list it.
    pub async fn get_balance(&self, asset: &str) -> Result<Decimal, ExchangeError> {
        let snapshot = self.fetch_balances(asset).await?;
        Ok(snapshot.amount_of(asset))
    }

    async fn fetch_balances(&self, asset: &str) -> Result<BalanceSnapshot, ExchangeError> {
        self.log.record(ExchangeLogEntry::request(
            Endpoint::Balance,
            json!({ "asset": asset }),
        ));

        let balances = self
            .exchange
            .balances()
            .await
            .map_err(|e| self.failed(Endpoint::Balance, e))?;
        let snapshot = BalanceSnapshot::new(balances);

        self.log
            .record(ExchangeLogEntry::response(Endpoint::Balance, to_body(&snapshot)));
        Ok(snapshot)
    }

    fn failed(&self, endpoint: Endpoint, error: ExchangeError) -> ExchangeError {
        self.log.record_failure(endpoint, &error.to_string());
        error
    }
}

/// Log body for `value`. A body that will not serialize is logged as `null`.
fn to_body<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Logging unserializable exchange body as null");
        Value::Null
    })
}
