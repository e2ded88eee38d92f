//! Exchange log adapters.

mod tracing_exchange_log;

pub use tracing_exchange_log::{EXCHANGE_LOG_TARGET, TracingExchangeLog};
