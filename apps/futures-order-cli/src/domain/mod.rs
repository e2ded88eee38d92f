//! Domain Layer
//!
//! Value objects and validation rules with no I/O.
//!
//! - `order_entry`: order parameters, validation, normalized results
//! - `account`: balance snapshots
//! - `market`: instrument catalog
//! - `shared`: symbol, quantity and price value objects

pub mod account;
pub mod market;
pub mod order_entry;
pub mod shared;
