//! Futures Order CLI Binary
//!
//! Places one order on Binance USD-M futures through an interactive prompt.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin futures-order-cli
//! ```
//!
//! # Environment Variables
//!
//! ## Required (unless set in the settings file)
//! - `BINANCE_API_KEY`: API key
//! - `BINANCE_API_SECRET`: API secret
//!
//! ## Optional
//! - `BINANCE_TESTNET`: true | false (default: true)
//! - `ORDER_CLI_SETTINGS`: settings file path (default: ./settings.json)
//! - `RUST_LOG`: log filter, overrides the settings file

use std::io;
use std::sync::Arc;

use anyhow::Context;
use futures_order_cli::application::use_cases::OrderWorkflow;
use futures_order_cli::cli::{Prompter, SessionOutcome, run};
use futures_order_cli::infrastructure::config::load_settings;
use futures_order_cli::infrastructure::exchange::BinanceFuturesAdapter;
use futures_order_cli::infrastructure::logging::TracingExchangeLog;
use futures_order_cli::telemetry::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_settings().context("Failed to load settings")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        environment = %config.environment,
        quote_asset = %config.quote_asset,
        "Starting futures order CLI"
    );

    let adapter = BinanceFuturesAdapter::new(&config.binance_config())
        .context("Failed to create exchange client")?;
    let workflow = OrderWorkflow::new(
        Arc::new(adapter),
        Arc::new(TracingExchangeLog),
        config.workflow_config(),
    );

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    match run(&workflow, &mut prompter).await {
        SessionOutcome::Placed(result) => {
            tracing::info!(order_id = ?result.order_id, "Session finished");
        }
        SessionOutcome::Aborted(reason) => {
            tracing::info!(%reason, "Session ended without an order");
        }
    }

    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
