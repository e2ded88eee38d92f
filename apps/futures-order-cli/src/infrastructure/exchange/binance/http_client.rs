//! HTTP client wrapper for the Binance futures REST API.
//!
//! One attempt per call. Failures are classified and handed back; there is
//! no retry loop.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::api_types::BinanceErrorResponse;
use super::config::BinanceConfig;
use super::error::BinanceError;
use super::signer::{API_KEY_HEADER, BinanceSigner, build_query_string};

/// HTTP client for the Binance futures API.
#[derive(Debug, Clone)]
pub struct BinanceHttpClient {
    client: Client,
    signer: BinanceSigner,
    base_url: String,
}

impl BinanceHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(BinanceError::MissingCredentials);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            signer: BinanceSigner::new(&config.api_key, &config.api_secret),
            base_url: config.base_url().to_string(),
        })
    }

    /// Unsigned GET.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, BinanceError> {
        let url = self.url(path, params);
        tracing::debug!(path, "GET (public)");
        self.send(self.client.get(url)).await
    }

    /// Signed GET: timestamp and signature go in the query string.
    pub async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<T, BinanceError> {
        let signed = self.sign(params)?;
        let url = self.url(path, &signed);
        tracing::debug!(path, "GET (signed)");
        self.send(
            self.client
                .get(url)
                .header(API_KEY_HEADER, self.signer.api_key()),
        )
        .await
    }

    /// Signed POST: parameters go form-encoded in the body.
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<T, BinanceError> {
        let signed = self.sign(params)?;
        tracing::debug!(path, "POST (signed)");
        self.send(
            self.client
                .post(format!("{}{path}", self.base_url))
                .header(API_KEY_HEADER, self.signer.api_key())
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(build_query_string(&signed)),
        )
        .await
    }

    fn sign(&self, mut params: Vec<(String, String)>) -> Result<Vec<(String, String)>, BinanceError> {
        self.signer
            .sign(&mut params, chrono::Utc::now().timestamp_millis())?;
        Ok(params)
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> String {
        if params.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{}", self.base_url, build_query_string(params))
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BinanceError> {
        let response = request
            .send()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, BinanceError> {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let body = response
        .text()
        .await
        .map_err(|e| BinanceError::Network(e.to_string()))?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| BinanceError::JsonParse(e.to_string()));
    }

    match categorize_status(status) {
        ErrorCategory::RateLimited => Err(BinanceError::RateLimited {
            retry_after_secs: retry_after,
        }),
        ErrorCategory::Client => match serde_json::from_str::<BinanceErrorResponse>(&body) {
            Ok(err) => Err(BinanceError::Api {
                status: status.as_u16(),
                code: err.code,
                message: err.msg,
            }),
            Err(_) => Err(BinanceError::Http {
                status: status.as_u16(),
                body,
            }),
        },
        ErrorCategory::Server => Err(BinanceError::Http {
            status: status.as_u16(),
            body,
        }),
    }
}

/// Error category for a non-success status.
#[derive(Debug, PartialEq, Eq)]
enum ErrorCategory {
    RateLimited,
    Client,
    Server,
}

/// Categorize a non-success HTTP status.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        429 | 418 => ErrorCategory::RateLimited,
        400..=499 => ErrorCategory::Client,
        _ => ErrorCategory::Server,
    }
}
