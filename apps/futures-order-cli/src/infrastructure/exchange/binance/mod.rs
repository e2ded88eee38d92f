//! Binance USDⓈ-M Futures Adapter
//!
//! Implementation of `ExchangePort` over the Binance futures REST API:
//! - HMAC-SHA256 signed requests with the API key header
//! - Testnet and production environments
//! - Exchange error bodies mapped onto `ExchangeError`

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;
mod signer;

pub use adapter::BinanceFuturesAdapter;
pub use api_types::paths;
pub use config::{BinanceConfig, BinanceEnvironment, DEFAULT_TIMEOUT};
pub use error::BinanceError;
pub use signer::{API_KEY_HEADER, BinanceSigner, build_query_string};
