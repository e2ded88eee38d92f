//! Binance futures adapter implementing `ExchangePort`.

use async_trait::async_trait;

use crate::application::ports::{ExchangeError, ExchangePort, OrderPayload};
use crate::domain::account::AssetBalance;
use crate::domain::market::ExchangeInfo;
use crate::domain::order_entry::RawOrderResponse;

use super::api_types::{BinanceBalanceEntry, BinanceExchangeInfo, order_params, paths};
use super::config::{BinanceConfig, BinanceEnvironment};
use super::error::BinanceError;
use super::http_client::BinanceHttpClient;

/// Binance USDⓈ-M futures adapter.
#[derive(Debug, Clone)]
pub struct BinanceFuturesAdapter {
    client: BinanceHttpClient,
    environment: BinanceEnvironment,
}

impl BinanceFuturesAdapter {
    /// Create a new adapter.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        let client = BinanceHttpClient::new(config)?;
        Ok(Self {
            client,
            environment: config.environment,
        })
    }

    /// Environment this adapter talks to.
    #[must_use]
    pub const fn environment(&self) -> BinanceEnvironment {
        self.environment
    }
}

#[async_trait]
impl ExchangePort for BinanceFuturesAdapter {
    async fn exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        let info: BinanceExchangeInfo = self
            .client
            .get_public(paths::EXCHANGE_INFO, &[])
            .await
            .map_err(ExchangeError::from)?;

        tracing::debug!(symbols = info.symbols.len(), "Fetched exchange info");
        Ok(info.into())
    }

    async fn balances(&self) -> Result<Vec<AssetBalance>, ExchangeError> {
        let entries: Vec<BinanceBalanceEntry> = self
            .client
            .get_signed(paths::BALANCE, Vec::new())
            .await
            .map_err(ExchangeError::from)?;

        Ok(entries.into_iter().map(AssetBalance::from).collect())
    }

    async fn create_order(
        &self,
        payload: OrderPayload,
    ) -> Result<RawOrderResponse, ExchangeError> {
        if self.environment.is_production() {
            tracing::warn!(
                symbol = %payload.symbol,
                "Submitting PRODUCTION order - this will execute real trades"
            );
        }

        tracing::info!(
            symbol = %payload.symbol,
            side = %payload.side,
            order_type = payload.order_type.as_str(),
            quantity = %payload.quantity,
            price = ?payload.price,
            stop_price = ?payload.stop_price,
            "Submitting order to Binance"
        );

        let response: RawOrderResponse = self
            .client
            .post_signed(paths::ORDER, order_params(&payload))
            .await
            .map_err(ExchangeError::from)?;

        tracing::info!(
            symbol = %payload.symbol,
            order_id = ?response.get("orderId"),
            status = ?response.get("status"),
            "Order accepted by Binance"
        );

        Ok(response)
    }
}
