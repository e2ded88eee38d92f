//! Shared Kernel
//!
//! Value objects that every part of the domain speaks in.

pub mod value_objects;

pub use value_objects::{Price, Quantity, Symbol};
