//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the exchange and the exchange log
//! - **Use Cases**: The order workflow and its balance guard

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
