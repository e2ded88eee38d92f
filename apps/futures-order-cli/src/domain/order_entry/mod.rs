//! Order Entry Bounded Context
//!
//! Turns raw user input into a validated [`OrderRequest`] and reduces the
//! exchange's answer to an [`OrderResult`].

mod errors;
mod order_request;
mod order_result;
pub mod value_objects;

pub use errors::ValidationError;
pub use order_request::{OrderKind, OrderParams, OrderRequest};
pub use order_result::{OrderResult, RawOrderResponse};
pub use value_objects::{OrderSide, OrderType, TimeInForce};
