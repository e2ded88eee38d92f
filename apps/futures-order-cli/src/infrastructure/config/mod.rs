//! Settings loading for the order CLI.
//!
//! Settings come from a JSON file with `${VAR}` / `${VAR:-default}`
//! interpolation, then `BINANCE_*` environment overrides on top.
//!
//! # Usage
//!
//! ```rust,ignore
//! use futures_order_cli::infrastructure::config::load_settings;
//!
//! // ORDER_CLI_SETTINGS or ./settings.json, plus BINANCE_* overrides
//! let config = load_settings()?;
//! println!("testnet: {}", !config.environment.is_production());
//! ```
//!
//! Example settings file:
//!
//! ```json
//! {
//!   "api_key": "${BINANCE_KEY}",
//!   "api_secret": "${BINANCE_SECRET}",
//!   "testnet": true,
//!   "quote_asset": "USDT",
//!   "recv_window_ms": 5000,
//!   "timeout_secs": 30,
//!   "log": { "level": "info", "format": "text", "file": "futures_order_cli.log" }
//! }
//! ```

mod credentials;
mod observability;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::application::use_cases::{DEFAULT_RECV_WINDOW_MS, OrderWorkflowConfig};
use crate::domain::account::DEFAULT_QUOTE_ASSET;
use crate::infrastructure::exchange::binance::{
    BinanceConfig, BinanceEnvironment, DEFAULT_TIMEOUT,
};

pub use credentials::Credentials;
pub use observability::{LogFormat, LoggingConfig};

/// Environment variable naming the settings file.
pub const SETTINGS_PATH_ENV: &str = "ORDER_CLI_SETTINGS";
/// Settings file used when `ORDER_CLI_SETTINGS` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";
/// Overrides `api_key`.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
/// Overrides `api_secret`.
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";
/// Overrides `testnet`.
pub const TESTNET_ENV: &str = "BINANCE_TESTNET";

/// Largest receive window the exchange accepts.
const MAX_RECV_WINDOW_MS: u64 = 60_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        /// Path to the settings file.
        path: String,
        /// The underlying IO error.
        source: io::Error,
    },

    /// Failed to parse the settings JSON.
    #[error("Failed to parse settings JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A credential is absent from both the file and the environment.
    #[error("Missing {field}: set it in the settings file or via {env}")]
    MissingCredential {
        /// Settings file field.
        field: &'static str,
        /// Environment override.
        env: &'static str,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Settings validation failed.
    #[error("Settings validation failed: {0}")]
    ValidationError(String),
}

/// Everything the binary needs to run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API credential pair.
    pub credentials: Credentials,
    /// Testnet or production.
    pub environment: BinanceEnvironment,
    /// Asset the balance guard checks.
    pub quote_asset: String,
    /// Receive window attached to orders.
    pub recv_window_ms: u64,
    /// Per-call HTTP timeout.
    pub timeout: Duration,
    /// Logging setup.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Adapter configuration.
    #[must_use]
    pub fn binance_config(&self) -> BinanceConfig {
        BinanceConfig::new(
            self.credentials.api_key(),
            self.credentials.api_secret(),
            self.environment,
        )
        .with_timeout(self.timeout)
    }

    /// Workflow configuration.
    #[must_use]
    pub fn workflow_config(&self) -> OrderWorkflowConfig {
        OrderWorkflowConfig {
            quote_asset: self.quote_asset.clone(),
            recv_window_ms: self.recv_window_ms,
        }
    }
}

/// On-disk settings shape. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_secret: Option<String>,
    #[serde(default)]
    testnet: Option<bool>,
    #[serde(default)]
    quote_asset: Option<String>,
    #[serde(default)]
    recv_window_ms: Option<u64>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    log: LoggingConfig,
}

// ============================================
// Settings Loading
// ============================================

/// Load settings from the process environment.
///
/// Reads the file named by `ORDER_CLI_SETTINGS`, or `settings.json` when
/// unset. The default file may be absent, in which case everything comes
/// from the environment; a file named explicitly must exist.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read or parsed, a
/// credential is missing, or a value is out of range.
pub fn load_settings() -> Result<AppConfig, ConfigError> {
    load_settings_with(&|name: &str| std::env::var(name).ok())
}

/// Load settings with an explicit environment lookup.
///
/// # Errors
///
/// See [`load_settings`].
pub fn load_settings_with(env: &dyn Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match env(SETTINGS_PATH_ENV).filter(|p| !p.is_empty()) {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_PATH), false),
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if !required && e.kind() == io::ErrorKind::NotFound => "{}".to_string(),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    load_settings_from_str(&contents, env)
}

/// Load settings from a JSON string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the JSON cannot be parsed or the result is
/// incomplete or invalid.
pub fn load_settings_from_str(
    json: &str,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let interpolated = interpolate_env_vars(json, env);
    let file: SettingsFile = serde_json::from_str(&interpolated)?;
    let config = resolve(file, env)?;
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment overrides and defaults.
fn resolve(
    file: SettingsFile,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let api_key = non_empty(API_KEY_ENV)
        .or(file.api_key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingCredential {
            field: "api_key",
            env: API_KEY_ENV,
        })?;
    let api_secret = non_empty(API_SECRET_ENV)
        .or(file.api_secret)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingCredential {
            field: "api_secret",
            env: API_SECRET_ENV,
        })?;

    let testnet = match non_empty(TESTNET_ENV) {
        Some(raw) => parse_bool(TESTNET_ENV, &raw)?,
        None => file.testnet.unwrap_or(true),
    };

    Ok(AppConfig {
        credentials: Credentials::new(api_key, api_secret),
        environment: BinanceEnvironment::from_testnet_flag(testnet),
        quote_asset: file
            .quote_asset
            .map_or_else(|| DEFAULT_QUOTE_ASSET.to_string(), |a| a.trim().to_uppercase()),
        recv_window_ms: file.recv_window_ms.unwrap_or(DEFAULT_RECV_WINDOW_MS),
        timeout: file
            .timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
        logging: file.log,
    })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // literal pattern
fn interpolate_env_vars(input: &str, env: &dyn Fn(&str) -> Option<String>) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        cap.get(1)
            .and_then(|var| env(var.as_str()))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default_value.to_string())
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.quote_asset.is_empty() {
        return Err(ConfigError::ValidationError(
            "quote_asset must not be empty".to_string(),
        ));
    }

    if config.recv_window_ms == 0 || config.recv_window_ms > MAX_RECV_WINDOW_MS {
        return Err(ConfigError::ValidationError(format!(
            "recv_window_ms must be between 1 and {MAX_RECV_WINDOW_MS}, got {}",
            config.recv_window_ms
        )));
    }

    if config.timeout.is_zero() {
        return Err(ConfigError::ValidationError(
            "timeout_secs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
