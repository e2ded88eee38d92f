//! Shared value objects used across bounded contexts.

mod price;
mod quantity;
mod symbol;

pub use price::Price;
pub use quantity::Quantity;
pub use symbol::Symbol;
