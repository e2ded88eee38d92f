//! Binance futures adapter configuration.

use std::fmt;
use std::time::Duration;

/// Default HTTP timeout for every exchange call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Binance USDⓈ-M futures environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinanceEnvironment {
    /// Futures testnet (simulated funds).
    #[default]
    Testnet,
    /// Production (real money).
    Production,
}

impl BinanceEnvironment {
    /// Pick the environment from a `testnet` flag.
    #[must_use]
    pub const fn from_testnet_flag(testnet: bool) -> Self {
        if testnet { Self::Testnet } else { Self::Production }
    }

    /// REST base URL.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.binancefuture.com",
            Self::Production => "https://fapi.binance.com",
        }
    }

    /// Check if this is production trading.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "TESTNET"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

/// Configuration for the Binance futures adapter.
#[derive(Clone)]
pub struct BinanceConfig {
    /// API key.
    pub api_key: String,
    /// API secret.
    pub api_secret: String,
    /// Trading environment.
    pub environment: BinanceEnvironment,
    /// HTTP request timeout.
    pub timeout: Duration,
    base_url: Option<String>,
}

impl BinanceConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        environment: BinanceEnvironment,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            environment,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the adapter at a different host, e.g. a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// REST base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }
}

impl fmt::Debug for BinanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url())
            .finish()
    }
}
