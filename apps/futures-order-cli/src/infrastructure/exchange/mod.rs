//! Exchange adapters.

pub mod binance;

pub use binance::{BinanceConfig, BinanceEnvironment, BinanceError, BinanceFuturesAdapter};
