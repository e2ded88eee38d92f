//! Exchange Log Port (Driven Port)
//!
//! Every request and response crossing the exchange boundary is handed to
//! this port, along with every failure. The order workflow receives an
//! implementation at construction and never touches a global logger for
//! these records.

use std::fmt;
use std::sync::RwLock;

use serde::Serialize;
use serde_json::Value;

/// Which way a logged body travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent to the exchange.
    Request,
    /// Received from the exchange.
    Response,
}

impl Direction {
    /// Log tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical exchange endpoint, independent of any URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    /// Instrument catalog.
    #[serde(rename = "exchangeInfo")]
    ExchangeInfo,
    /// Account balances.
    #[serde(rename = "balance")]
    Balance,
    /// Order entry.
    #[serde(rename = "order")]
    Order,
}

impl Endpoint {
    /// Log tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExchangeInfo => "exchangeInfo",
            Self::Balance => "balance",
            Self::Order => "order",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One body crossing the exchange boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeLogEntry {
    /// Request or response.
    pub direction: Direction,
    /// Logical endpoint.
    pub endpoint: Endpoint,
    /// Body as JSON. `Null` for bodiless requests.
    pub body: Value,
}

impl ExchangeLogEntry {
    /// Outgoing entry.
    #[must_use]
    pub const fn request(endpoint: Endpoint, body: Value) -> Self {
        Self {
            direction: Direction::Request,
            endpoint,
            body,
        }
    }

    /// Incoming entry.
    #[must_use]
    pub const fn response(endpoint: Endpoint, body: Value) -> Self {
        Self {
            direction: Direction::Response,
            endpoint,
            body,
        }
    }
}

/// Port for recording exchange traffic.
///
/// Recording is synchronous and infallible: a sink that cannot write must
/// not abort the order it is describing.
pub trait ExchangeLogPort: Send + Sync {
    /// Record a request or response body. Informational severity.
    fn record(&self, entry: ExchangeLogEntry);

    /// Record a failed exchange call. Error severity.
    fn record_failure(&self, endpoint: Endpoint, message: &str);
}

/// A recorded failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeLogFailure {
    /// Logical endpoint.
    pub endpoint: Endpoint,
    /// Error message.
    pub message: String,
}

/// Exchange log that keeps everything in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryExchangeLog {
    entries: RwLock<Vec<ExchangeLogEntry>>,
    failures: RwLock<Vec<ExchangeLogFailure>>,
}

impl InMemoryExchangeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded request and response entries.
    #[must_use]
    pub fn entries(&self) -> Vec<ExchangeLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Recorded failures.
    #[must_use]
    pub fn failures(&self) -> Vec<ExchangeLogFailure> {
        self.failures
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Entries recorded for one endpoint.
    #[must_use]
    pub fn entries_for(&self, endpoint: Endpoint) -> Vec<ExchangeLogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.endpoint == endpoint)
            .collect()
    }
}

impl ExchangeLogPort for InMemoryExchangeLog {
    fn record(&self, entry: ExchangeLogEntry) {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(entry);
    }

    fn record_failure(&self, endpoint: Endpoint, message: &str) {
        self.failures
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(ExchangeLogFailure {
                endpoint,
                message: message.to_string(),
            });
    }
}
