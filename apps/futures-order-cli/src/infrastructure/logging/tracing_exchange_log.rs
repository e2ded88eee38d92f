//! `tracing`-backed exchange log.

use crate::application::ports::{Endpoint, ExchangeLogEntry, ExchangeLogPort};

/// Target every exchange traffic event is emitted under.
pub const EXCHANGE_LOG_TARGET: &str = "exchange";

/// Emits each record as a `tracing` event: bodies at INFO, failures at ERROR.
///
/// Where the events end up is decided by the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExchangeLog;

impl ExchangeLogPort for TracingExchangeLog {
    fn record(&self, entry: ExchangeLogEntry) {
        tracing::info!(
            target: EXCHANGE_LOG_TARGET,
            direction = entry.direction.as_str(),
            endpoint = entry.endpoint.as_str(),
            body = %entry.body,
            "exchange {}",
            entry.direction
        );
    }

    fn record_failure(&self, endpoint: Endpoint, message: &str) {
        tracing::error!(
            target: EXCHANGE_LOG_TARGET,
            endpoint = endpoint.as_str(),
            error = message,
            "exchange call failed"
        );
    }
}
