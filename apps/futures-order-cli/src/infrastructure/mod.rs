//! Infrastructure Layer
//!
//! Adapters behind the application ports, plus settings loading:
//!
//! - **Exchange**: Binance futures REST client
//! - **Logging**: `tracing`-backed exchange log
//! - **Config**: Settings file and environment loading

pub mod config;
pub mod exchange;
pub mod logging;
