//! Instrument catalog.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

/// A tradable contract listed by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    /// Instrument identifier.
    pub symbol: Symbol,
}

impl Instrument {
    /// Create an instrument entry.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

/// Exchange catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    /// Listed instruments in exchange order.
    pub symbols: Vec<Instrument>,
}

impl ExchangeInfo {
    /// Project out the identifiers, preserving catalog order.
    #[must_use]
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols.into_iter().map(|i| i.symbol).collect()
    }
}
