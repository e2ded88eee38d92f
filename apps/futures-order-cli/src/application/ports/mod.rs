//! Application Ports (Driven)
//!
//! Ports define the interfaces the order workflow uses to reach the
//! exchange and to record what crossed that boundary.

mod exchange_log_port;
mod exchange_port;

pub use exchange_log_port::{
    Direction, Endpoint, ExchangeLogEntry, ExchangeLogFailure, ExchangeLogPort,
    InMemoryExchangeLog,
};
#[cfg(test)]
pub use exchange_port::MockExchangePort;
pub use exchange_port::{
    ExchangeError, ExchangePort, OrderPayload, PayloadOrderType, ResponseType,
};
