//! Account balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote asset the balance guard checks by default.
pub const DEFAULT_QUOTE_ASSET: &str = "USDT";

/// Wallet balance of a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    /// Asset code, e.g. "USDT".
    pub asset: String,
    /// Wallet balance.
    pub balance: Decimal,
}

impl AssetBalance {
    /// Create a new asset balance.
    #[must_use]
    pub fn new(asset: impl Into<String>, balance: Decimal) -> Self {
        Self {
            asset: asset.into(),
            balance,
        }
    }
}

/// Point-in-time view of every asset balance on the account.
///
/// Built from a single fetch and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSnapshot {
    balances: Vec<AssetBalance>,
}

impl BalanceSnapshot {
    /// Wrap a fetched balance list.
    #[must_use]
    pub const fn new(balances: Vec<AssetBalance>) -> Self {
        Self { balances }
    }

    /// Balance of `asset`, or zero when the account does not list it.
    ///
    /// Asset codes are compared exactly.
    #[must_use]
    pub fn amount_of(&self, asset: &str) -> Decimal {
        self.balances
            .iter()
            .find(|b| b.asset == asset)
            .map_or(Decimal::ZERO, |b| b.balance)
    }

    /// All balances in exchange order.
    #[must_use]
    pub fn balances(&self) -> &[AssetBalance] {
        &self.balances
    }
}

impl From<Vec<AssetBalance>> for BalanceSnapshot {
    fn from(balances: Vec<AssetBalance>) -> Self {
        Self::new(balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_of_finds_asset() {
        let snapshot = BalanceSnapshot::new(vec![
            AssetBalance::new("BNB", dec!(0.5)),
            AssetBalance::new("USDT", dec!(100.25)),
        ]);
        assert_eq!(snapshot.amount_of("USDT"), dec!(100.25));
    }

    #[test]
    fn amount_of_missing_asset_is_zero() {
        let snapshot = BalanceSnapshot::new(vec![AssetBalance::new("BNB", dec!(0.5))]);
        assert_eq!(snapshot.amount_of("USDT"), Decimal::ZERO);
    }

    #[test]
    fn amount_of_is_case_sensitive() {
        let snapshot = BalanceSnapshot::new(vec![AssetBalance::new("USDT", dec!(10))]);
        assert_eq!(snapshot.amount_of("usdt"), Decimal::ZERO);
    }

    #[test]
    fn amount_of_empty_snapshot_is_zero() {
        assert_eq!(BalanceSnapshot::default().amount_of("USDT"), Decimal::ZERO);
    }
}
