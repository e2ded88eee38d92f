// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Futures Order CLI - Core Library
//!
//! Validates order parameters, applies a pre-trade balance guard and submits
//! MARKET, LIMIT and STOP-LIMIT orders to Binance USD-M futures.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Value objects and validation, no I/O
//!   - `order_entry`: order parameters, request building, normalized results
//!   - `account`: balance snapshots
//!   - `market`: instrument catalog
//!
//! - **Application**: Ports and the order workflow
//!   - `ports`: `ExchangePort`, `ExchangeLogPort`
//!   - `use_cases`: `OrderWorkflow`, `BalanceGuard`
//!
//! - **Infrastructure**: Adapters
//!   - `exchange::binance`: signed REST client for the futures API
//!   - `logging`: exchange log backed by `tracing`
//!   - `config`: settings file and environment overrides
//!
//! - **CLI**: the interactive prompt driving one order per run

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Hexagonal Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Interactive order entry.
pub mod cli;

/// Global logging setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{ExchangeError, ExchangeLogPort, ExchangePort, OrderPayload};
pub use application::use_cases::{OrderWorkflow, OrderWorkflowConfig, OrderWorkflowError};
pub use domain::order_entry::{
    OrderParams, OrderRequest, OrderResult, OrderSide, OrderType, ValidationError,
};
pub use infrastructure::exchange::{BinanceConfig, BinanceEnvironment, BinanceFuturesAdapter};
