//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod balance_guard;
mod error;
mod order_workflow;

pub use balance_guard::BalanceGuard;
pub use error::OrderWorkflowError;
pub use order_workflow::{DEFAULT_RECV_WINDOW_MS, OrderWorkflow, OrderWorkflowConfig};
