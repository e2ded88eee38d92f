//! Interactive order entry.
//!
//! One session places at most one order: show a few symbols, ask for the
//! order fields, print the normalized result or a one-line error.

mod prompt;

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::application::ports::{ExchangeLogPort, ExchangePort};
use crate::application::use_cases::OrderWorkflow;
use crate::domain::order_entry::{OrderParams, OrderResult, OrderSide, OrderType};
use crate::domain::shared::Symbol;

pub use prompt::{PromptError, Prompter};

/// How many catalog symbols the session shows up front.
pub const SYMBOL_PREVIEW: usize = 5;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The exchange accepted the order.
    Placed(OrderResult),
    /// The session stopped early; the message was shown to the user.
    Aborted(String),
}

/// Run one interactive order entry session.
///
/// Every input, validation and exchange failure ends the session with a
/// printed message. Only console failures are returned as errors.
pub async fn run_session<E, L, R, W>(
    workflow: &OrderWorkflow<E, L>,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionOutcome, PromptError>
where
    E: ExchangePort,
    L: ExchangeLogPort,
    R: BufRead,
    W: Write,
{
    let symbols = match workflow.list_symbols().await {
        Ok(symbols) => symbols,
        Err(e) => return abort(prompter, format!("Error: {e}")),
    };
    let preview: Vec<&str> = symbols
        .iter()
        .take(SYMBOL_PREVIEW)
        .map(Symbol::as_str)
        .collect();
    prompter.say(format!("Available Symbols: {} ...", preview.join(", ")))?;

    let symbol = Symbol::new(prompter.ask("Enter trading symbol")?);
    if !symbols.contains(&symbol) {
        return abort(prompter, format!("Error: {symbol} symbol not found"));
    }

    let side = prompter.ask("Order side (BUY/SELL)")?;
    if let Err(e) = OrderSide::parse(&side) {
        return abort(prompter, format!("Error: {e}"));
    }

    let order_type_raw = prompter.ask("Order type (MARKET/LIMIT/STOP-LIMIT)")?;
    let order_type = match OrderType::parse(&order_type_raw) {
        Ok(order_type) => order_type,
        Err(e) => return abort(prompter, format!("Error: {e}")),
    };

    let (quantity, price, stop_price) = match read_amounts(prompter, order_type) {
        Ok(amounts) => amounts,
        Err(e @ PromptError::InvalidNumber { .. }) => {
            return abort(prompter, format!("Error: {e}"));
        }
        Err(e) => return Err(e),
    };

    let params = OrderParams {
        symbol: symbol.into_inner(),
        side,
        order_type: order_type_raw,
        quantity,
        price,
        stop_price,
    };

    match workflow.place(&params).await {
        Ok(result) => {
            prompter.say("Order placed:")?;
            prompter.say(result.to_pretty_json())?;
            Ok(SessionOutcome::Placed(result))
        }
        Err(e) => {
            tracing::error!(error = %e, "Order failed");
            abort(prompter, format!("Error: {e}"))
        }
    }
}

/// Run one session and end it normally whatever happens.
///
/// Console failures that escape [`run_session`] are logged at error
/// severity and reported on one line, then the session counts as aborted.
pub async fn run<E, L, R, W>(
    workflow: &OrderWorkflow<E, L>,
    prompter: &mut Prompter<R, W>,
) -> SessionOutcome
where
    E: ExchangePort,
    L: ExchangeLogPort,
    R: BufRead,
    W: Write,
{
    match run_session(workflow, prompter).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Session failed");
            let message = format!("Error: {e}");
            if let Err(report_err) = prompter.say(format!("\n{message}")) {
                tracing::error!(error = %report_err, "Could not report session failure");
            }
            SessionOutcome::Aborted(message)
        }
    }
}

/// Quantity, then the prices the order type needs.
fn read_amounts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    order_type: OrderType,
) -> Result<(Decimal, Option<Decimal>, Option<Decimal>), PromptError> {
    let quantity = prompter.ask_decimal("Quantity")?;
    let price = if order_type.requires_limit_price() {
        Some(prompter.ask_decimal("Limit price")?)
    } else {
        None
    };
    let stop_price = if order_type.requires_stop_price() {
        Some(prompter.ask_decimal("Stop price")?)
    } else {
        None
    };
    Ok((quantity, price, stop_price))
}

fn abort<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    message: String,
) -> Result<SessionOutcome, PromptError> {
    prompter.say(&message)?;
    Ok(SessionOutcome::Aborted(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        ExchangeError, InMemoryExchangeLog, MockExchangePort, PayloadOrderType,
    };
    use crate::application::use_cases::OrderWorkflowConfig;
    use crate::domain::account::AssetBalance;
    use crate::domain::market::{ExchangeInfo, Instrument};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::io::Cursor;
    use std::sync::Arc;

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn catalog() -> ExchangeInfo {
        ExchangeInfo {
            symbols: ["BTCUSDT", "ETHUSDT", "BNBUSDT", "XRPUSDT", "ADAUSDT", "SOLUSDT"]
                .into_iter()
                .map(Instrument::new)
                .collect(),
        }
    }

    fn exchange_with_catalog() -> MockExchangePort {
        let mut exchange = MockExchangePort::new();
        exchange
            .expect_exchange_info()
            .times(1)
            .returning(|| Ok(catalog()));
        exchange
    }

    fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    async fn run(exchange: MockExchangePort, input: &str) -> (SessionOutcome, String) {
        let workflow = OrderWorkflow::new(
            Arc::new(exchange),
            Arc::new(InMemoryExchangeLog::new()),
            OrderWorkflowConfig::default(),
        );
        let mut prompter = prompter(input);
        let outcome = run_session(&workflow, &mut prompter).await.unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (outcome, output)
    }

    #[tokio::test]
    async fn market_buy_session() {
        let mut exchange = exchange_with_catalog();
        exchange
            .expect_balances()
            .times(1)
            .returning(|| Ok(vec![AssetBalance::new("USDT", dec!(100))]));
        exchange
            .expect_create_order()
            .withf(|p| p.symbol.as_str() == "BTCUSDT" && p.order_type == PayloadOrderType::Market)
            .times(1)
            .returning(|_| match json!({"orderId": 7, "status": "FILLED"}) {
                serde_json::Value::Object(map) => Ok(map),
                _ => unreachable!(),
            });

        let (outcome, output) = run(exchange, "btcusdt\nbuy\nmarket\n0.01\n").await;

        assert_eq!(
            outcome,
            SessionOutcome::Placed(OrderResult {
                order_id: Some(7),
                status: Some("FILLED".to_string()),
                ..OrderResult::default()
            })
        );
        assert!(output.starts_with(
            "Available Symbols: BTCUSDT, ETHUSDT, BNBUSDT, XRPUSDT, ADAUSDT ...\n"
        ));
        assert!(!output.contains("SOLUSDT"));
        assert!(!output.contains("Limit price"));
        assert!(output.contains("Order placed:"));
        assert!(output.contains("\"orderId\": 7"));
    }

    #[tokio::test]
    async fn stop_limit_session_asks_both_prices() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_balances().never();
        exchange
            .expect_create_order()
            .withf(|p| {
                p.order_type == PayloadOrderType::Stop
                    && p.price == Some(dec!(3000))
                    && p.stop_price == Some(dec!(3050))
            })
            .times(1)
            .returning(|_| Ok(serde_json::Map::new()));

        let (outcome, output) = run(exchange, "ETHUSDT\nSELL\nSTOP-LIMIT\n1\n3000\n3050\n").await;

        assert_eq!(outcome, SessionOutcome::Placed(OrderResult::default()));
        assert!(output.contains("Limit price: "));
        assert!(output.contains("Stop price: "));
    }

    #[tokio::test]
    async fn unknown_symbol_stops_before_side() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().never();

        let (outcome, output) = run(exchange, "DOGEUSDT\n").await;

        assert_eq!(
            outcome,
            SessionOutcome::Aborted("Error: DOGEUSDT symbol not found".to_string())
        );
        assert!(!output.contains("Order side"));
    }

    #[tokio::test]
    async fn bad_side_stops_before_type() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().never();

        let (outcome, output) = run(exchange, "BTCUSDT\nHOLD\n").await;

        assert!(matches!(outcome, SessionOutcome::Aborted(m) if m.contains("HOLD")));
        assert!(!output.contains("Order type"));
    }

    #[tokio::test]
    async fn bad_type_stops_before_quantity() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().never();

        let (outcome, output) = run(exchange, "BTCUSDT\nBUY\nTRAILING\n").await;

        assert!(matches!(outcome, SessionOutcome::Aborted(m) if m.contains("TRAILING")));
        assert!(!output.contains("Quantity"));
    }

    #[tokio::test]
    async fn non_numeric_quantity_aborts() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().never();

        let (outcome, _) = run(exchange, "BTCUSDT\nSELL\nMARKET\nlots\n").await;

        assert_eq!(
            outcome,
            SessionOutcome::Aborted("Error: Quantity: 'lots' is not a number".to_string())
        );
    }

    #[tokio::test]
    async fn insufficient_balance_is_reported() {
        let mut exchange = exchange_with_catalog();
        exchange
            .expect_balances()
            .returning(|| Ok(vec![AssetBalance::new("USDT", dec!(1))]));
        exchange.expect_create_order().never();

        let (outcome, output) = run(exchange, "BTCUSDT\nBUY\nMARKET\n5\n").await;

        assert!(matches!(outcome, SessionOutcome::Aborted(_)));
        assert!(output.contains("Insufficient USDT balance"));
    }

    #[tokio::test]
    async fn rejection_is_reported() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().returning(|_| {
            Err(ExchangeError::Rejected {
                code: -1111,
                message: "Precision is over the maximum defined for this asset.".to_string(),
            })
        });

        let (outcome, _) = run(exchange, "BTCUSDT\nSELL\nLIMIT\n0.0000001\n60000\n").await;

        assert!(matches!(outcome, SessionOutcome::Aborted(m) if m.contains("-1111")));
    }

    #[tokio::test]
    async fn catalog_failure_aborts() {
        let mut exchange = MockExchangePort::new();
        exchange.expect_exchange_info().returning(|| {
            Err(ExchangeError::Transport {
                message: "connection refused".to_string(),
            })
        });

        let (outcome, output) = run(exchange, "").await;

        assert!(matches!(outcome, SessionOutcome::Aborted(m) if m.contains("connection refused")));
        assert!(!output.contains("Available Symbols"));
    }

    #[tokio::test]
    async fn closed_input_is_an_error() {
        let workflow = OrderWorkflow::new(
            Arc::new(exchange_with_catalog()),
            Arc::new(InMemoryExchangeLog::new()),
            OrderWorkflowConfig::default(),
        );
        let mut prompter = prompter("BTCUSDT\n");

        let result = run_session(&workflow, &mut prompter).await;

        assert!(matches!(result, Err(PromptError::Closed { .. })));
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn closed_input_is_logged_and_ends_normally() {
        let logs = Buffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let workflow = OrderWorkflow::new(
            Arc::new(exchange_with_catalog()),
            Arc::new(InMemoryExchangeLog::new()),
            OrderWorkflowConfig::default(),
        );
        let mut prompter = prompter("BTCUSDT\n");

        let outcome = super::run(&workflow, &mut prompter).await;

        assert!(matches!(outcome, SessionOutcome::Aborted(m) if m.starts_with("Error: Input closed")));
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.ends_with("\nError: Input closed while waiting for Order side (BUY/SELL)\n"));
        let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ERROR"));
        assert!(logged.contains("Session failed"));
    }

    #[tokio::test]
    async fn run_passes_through_completed_sessions() {
        let mut exchange = exchange_with_catalog();
        exchange.expect_create_order().never();
        let workflow = OrderWorkflow::new(
            Arc::new(exchange),
            Arc::new(InMemoryExchangeLog::new()),
            OrderWorkflowConfig::default(),
        );
        let mut prompter = prompter("DOGEUSDT\n");

        let outcome = super::run(&workflow, &mut prompter).await;

        assert_eq!(
            outcome,
            SessionOutcome::Aborted("Error: DOGEUSDT symbol not found".to_string())
        );
    }
}
