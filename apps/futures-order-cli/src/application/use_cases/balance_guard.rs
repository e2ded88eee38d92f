//! Pre-trade balance guard.

use super::error::OrderWorkflowError;
use crate::domain::account::BalanceSnapshot;
use crate::domain::order_entry::OrderRequest;

/// Refuses BUY orders the account cannot obviously cover.
///
/// The comparison is between the quote asset balance and the raw order
/// quantity, not the notional value (quantity times price). A 0.01 BTC buy
/// passes with 1 USDT on the account. This is a coarse sanity check, not a
/// margin check; the exchange still has the final word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceGuard {
    quote_asset: String,
}

impl BalanceGuard {
    /// Guard against the given quote asset.
    #[must_use]
    pub fn new(quote_asset: impl Into<String>) -> Self {
        Self {
            quote_asset: quote_asset.into(),
        }
    }

    /// Asset the guard reads from the balance snapshot.
    #[must_use]
    pub fn quote_asset(&self) -> &str {
        &self.quote_asset
    }

    /// Whether `request` needs a balance check at all. SELL orders never do.
    #[must_use]
    pub const fn applies_to(&self, request: &OrderRequest) -> bool {
        request.side().is_buy()
    }

    /// Fail iff the snapshot holds less of the quote asset than the order
    /// quantity.
    pub fn check(
        &self,
        request: &OrderRequest,
        snapshot: &BalanceSnapshot,
    ) -> Result<(), OrderWorkflowError> {
        if !self.applies_to(request) {
            return Ok(());
        }

        let available = snapshot.amount_of(&self.quote_asset);
        let required = request.quantity().amount();
        if available < required {
            return Err(OrderWorkflowError::InsufficientBalance {
                asset: self.quote_asset.clone(),
                available,
                required,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AssetBalance, DEFAULT_QUOTE_ASSET};
    use crate::domain::order_entry::OrderSide;
    use crate::domain::shared::{Quantity, Symbol};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn request(side: OrderSide, quantity: Decimal) -> OrderRequest {
        OrderRequest::market(
            Symbol::new("BTCUSDT"),
            side,
            Quantity::try_new(quantity).unwrap(),
        )
    }

    fn usdt_guard() -> BalanceGuard {
        BalanceGuard::new(DEFAULT_QUOTE_ASSET)
    }

    fn usdt(amount: Decimal) -> BalanceSnapshot {
        BalanceSnapshot::new(vec![AssetBalance::new("USDT", amount)])
    }

    #[test]
    fn guards_configured_asset() {
        assert_eq!(usdt_guard().quote_asset(), "USDT");
    }

    #[test]
    fn buy_passes_when_balance_covers_quantity() {
        let guard = usdt_guard();
        assert!(
            guard
                .check(&request(OrderSide::Buy, dec!(0.01)), &usdt(dec!(100)))
                .is_ok()
        );
    }

    #[test]
    fn buy_passes_when_balance_equals_quantity() {
        let guard = usdt_guard();
        assert!(
            guard
                .check(&request(OrderSide::Buy, dec!(5)), &usdt(dec!(5)))
                .is_ok()
        );
    }

    #[test]
    fn buy_fails_when_balance_below_quantity() {
        let guard = usdt_guard();
        let err = guard
            .check(&request(OrderSide::Buy, dec!(10)), &usdt(dec!(5)))
            .unwrap_err();

        assert_eq!(
            err,
            OrderWorkflowError::InsufficientBalance {
                asset: "USDT".to_string(),
                available: dec!(5),
                required: dec!(10),
            }
        );
    }

    #[test]
    fn buy_fails_when_asset_missing() {
        let guard = usdt_guard();
        let snapshot = BalanceSnapshot::new(vec![AssetBalance::new("BNB", dec!(100))]);

        assert!(matches!(
            guard.check(&request(OrderSide::Buy, dec!(1)), &snapshot),
            Err(OrderWorkflowError::InsufficientBalance { available, .. }) if available == Decimal::ZERO
        ));
    }

    #[test]
    fn sell_is_never_guarded() {
        let guard = usdt_guard();
        assert!(!guard.applies_to(&request(OrderSide::Sell, dec!(10))));
        assert!(
            guard
                .check(&request(OrderSide::Sell, dec!(10)), &BalanceSnapshot::default())
                .is_ok()
        );
    }

    // Quantity is compared against the quote balance directly, so a buy whose
    // notional far exceeds the balance still passes.
    #[test]
    fn guard_ignores_notional() {
        let guard = usdt_guard();
        assert!(
            guard
                .check(&request(OrderSide::Buy, dec!(0.5)), &usdt(dec!(1)))
                .is_ok()
        );
    }

    #[test]
    fn custom_quote_asset() {
        let guard = BalanceGuard::new("BUSD");
        let snapshot = BalanceSnapshot::new(vec![
            AssetBalance::new("USDT", dec!(1000)),
            AssetBalance::new("BUSD", dec!(1)),
        ]);

        assert_eq!(snapshot.amount_of(guard.quote_asset()), dec!(1));
        assert!(
            guard
                .check(&request(OrderSide::Buy, dec!(2)), &snapshot)
                .is_err()
        );
    }
}
