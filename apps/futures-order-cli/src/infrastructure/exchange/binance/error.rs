//! Binance-specific error types.

use thiserror::Error;

use crate::application::ports::ExchangeError;

/// Errors from the Binance adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinanceError {
    /// API key or secret is empty.
    #[error("Binance credentials are missing")]
    MissingCredentials,

    /// The request never got an HTTP answer.
    #[error("Network error: {0}")]
    Network(String),

    /// The exchange refused the request with a coded error.
    #[error("API error {code}: {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Binance error code.
        code: i64,
        /// Binance error message.
        message: String,
    },

    /// Non-success answer without a usable error body, or a server error.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Request weight exhausted.
    #[error("Rate limited")]
    RateLimited {
        /// Suggested delay from `Retry-After`, if sent.
        retry_after_secs: Option<u64>,
    },

    /// Response body did not decode.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Request signature could not be computed.
    #[error("Signing error: {0}")]
    Signing(String),
}

impl From<BinanceError> for ExchangeError {
    fn from(err: BinanceError) -> Self {
        match err {
            BinanceError::Api {
                status,
                code,
                message,
            } if (400..500).contains(&status) => Self::Rejected { code, message },
            BinanceError::RateLimited {
                retry_after_secs: Some(secs),
            } => Self::Transport {
                message: format!("Rate limited, retry after {secs}s"),
            },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}
