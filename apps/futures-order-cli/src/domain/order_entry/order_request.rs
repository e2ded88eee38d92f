//! Order request value object and its construction from raw input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::value_objects::{OrderSide, OrderType};
use crate::domain::shared::{Price, Quantity, Symbol};

/// Raw, unvalidated order parameters as typed by a user.
///
/// Side, order type and symbol are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderParams {
    /// Instrument, e.g. "btcusdt".
    pub symbol: String,
    /// "buy" or "sell".
    pub side: String,
    /// "market", "limit" or "stop-limit".
    pub order_type: String,
    /// Order size.
    pub quantity: Decimal,
    /// Limit price (LIMIT and STOP-LIMIT only).
    pub price: Option<Decimal>,
    /// Trigger price (STOP-LIMIT only).
    pub stop_price: Option<Decimal>,
}

/// Per-type order shape. Each variant carries exactly the prices it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Quantity only.
    Market,
    /// Resting order at `price`.
    Limit {
        /// Limit price.
        price: Price,
    },
    /// Limit order at `price` armed once `stop_price` trades.
    StopLimit {
        /// Limit price once triggered.
        price: Price,
        /// Trigger price.
        stop_price: Price,
    },
}

impl OrderKind {
    /// Check the supplied price fields against what `order_type` takes.
    ///
    /// Missing required prices and superfluous ones are both errors.
    pub fn from_parts(
        order_type: OrderType,
        price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        match order_type {
            OrderType::Market => {
                if price.is_some() {
                    return Err(ValidationError::UnexpectedPriceField {
                        order_type,
                        field: "price",
                    });
                }
                if stop_price.is_some() {
                    return Err(ValidationError::UnexpectedPriceField {
                        order_type,
                        field: "stop_price",
                    });
                }
                Ok(Self::Market)
            }
            OrderType::Limit => {
                let Some(price) = price else {
                    return Err(ValidationError::MissingPrice);
                };
                if stop_price.is_some() {
                    return Err(ValidationError::UnexpectedPriceField {
                        order_type,
                        field: "stop_price",
                    });
                }
                Ok(Self::Limit {
                    price: Price::try_new(price, "price")?,
                })
            }
            OrderType::StopLimit => {
                let (Some(price), Some(stop_price)) = (price, stop_price) else {
                    return Err(ValidationError::MissingStopParams);
                };
                Ok(Self::StopLimit {
                    price: Price::try_new(price, "price")?,
                    stop_price: Price::try_new(stop_price, "stop_price")?,
                })
            }
        }
    }

    /// The user-facing order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self {
            Self::Market => OrderType::Market,
            Self::Limit { .. } => OrderType::Limit,
            Self::StopLimit { .. } => OrderType::StopLimit,
        }
    }

    /// Limit price, if the kind has one.
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        match self {
            Self::Market => None,
            Self::Limit { price } | Self::StopLimit { price, .. } => Some(*price),
        }
    }

    /// Trigger price, if the kind has one.
    #[must_use]
    pub const fn stop_price(&self) -> Option<Price> {
        match self {
            Self::StopLimit { stop_price, .. } => Some(*stop_price),
            Self::Market | Self::Limit { .. } => None,
        }
    }
}

/// A validated order, ready to be shaped into an exchange payload.
///
/// Immutable once built: fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    quantity: Quantity,
    kind: OrderKind,
}

impl OrderRequest {
    /// Validate raw parameters.
    ///
    /// Checks run symbol, side, order type with its prices, then quantity,
    /// and stop at the first failure.
    pub fn build(params: &OrderParams) -> Result<Self, ValidationError> {
        let symbol = Symbol::new(&params.symbol);
        symbol.validate()?;

        let side = OrderSide::parse(&params.side)?;
        let order_type = OrderType::parse(&params.order_type)?;
        let kind = OrderKind::from_parts(order_type, params.price, params.stop_price)?;
        let quantity = Quantity::try_new(params.quantity)?;

        Ok(Self {
            symbol,
            side,
            quantity,
            kind,
        })
    }

    /// Create a market order request.
    #[must_use]
    pub const fn market(symbol: Symbol, side: OrderSide, quantity: Quantity) -> Self {
        Self {
            symbol,
            side,
            quantity,
            kind: OrderKind::Market,
        }
    }

    /// Create a limit order request.
    #[must_use]
    pub const fn limit(symbol: Symbol, side: OrderSide, quantity: Quantity, price: Price) -> Self {
        Self {
            symbol,
            side,
            quantity,
            kind: OrderKind::Limit { price },
        }
    }

    /// Create a stop-limit order request.
    #[must_use]
    pub const fn stop_limit(
        symbol: Symbol,
        side: OrderSide,
        quantity: Quantity,
        price: Price,
        stop_price: Price,
    ) -> Self {
        Self {
            symbol,
            side,
            quantity,
            kind: OrderKind::StopLimit { price, stop_price },
        }
    }

    /// Instrument.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Per-type shape with its prices.
    #[must_use]
    pub const fn kind(&self) -> &OrderKind {
        &self.kind
    }

    /// Shortcut for `kind().order_type()`.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.kind.order_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(order_type: &str) -> OrderParams {
        OrderParams {
            symbol: "btcusdt".to_string(),
            side: "buy".to_string(),
            order_type: order_type.to_string(),
            quantity: dec!(0.01),
            price: None,
            stop_price: None,
        }
    }

    #[test]
    fn build_market_normalizes_case() {
        let request = OrderRequest::build(&params("market")).unwrap();

        assert_eq!(request.symbol().as_str(), "BTCUSDT");
        assert_eq!(request.side(), OrderSide::Buy);
        assert_eq!(request.kind(), &OrderKind::Market);
        assert_eq!(request.quantity().amount(), dec!(0.01));
    }

    #[test]
    fn build_market_rejects_price() {
        let mut p = params("market");
        p.price = Some(dec!(100));

        assert_eq!(
            OrderRequest::build(&p).unwrap_err(),
            ValidationError::UnexpectedPriceField {
                order_type: OrderType::Market,
                field: "price"
            }
        );
    }

    #[test]
    fn build_market_rejects_stop_price() {
        let mut p = params("market");
        p.stop_price = Some(dec!(100));

        assert!(matches!(
            OrderRequest::build(&p),
            Err(ValidationError::UnexpectedPriceField {
                field: "stop_price",
                ..
            })
        ));
    }

    #[test]
    fn build_limit_requires_price() {
        assert_eq!(
            OrderRequest::build(&params("limit")).unwrap_err(),
            ValidationError::MissingPrice
        );
    }

    #[test]
    fn build_limit_with_price() {
        let mut p = params("LIMIT");
        p.price = Some(dec!(65000.5));

        let request = OrderRequest::build(&p).unwrap();
        assert_eq!(request.order_type(), OrderType::Limit);
        assert_eq!(request.kind().price().unwrap().amount(), dec!(65000.5));
        assert!(request.kind().stop_price().is_none());
    }

    #[test]
    fn build_limit_rejects_stop_price() {
        let mut p = params("limit");
        p.price = Some(dec!(100));
        p.stop_price = Some(dec!(99));

        assert!(matches!(
            OrderRequest::build(&p),
            Err(ValidationError::UnexpectedPriceField {
                order_type: OrderType::Limit,
                ..
            })
        ));
    }

    #[test]
    fn build_stop_limit_requires_both_prices() {
        let mut only_price = params("stop-limit");
        only_price.price = Some(dec!(3000));
        assert_eq!(
            OrderRequest::build(&only_price).unwrap_err(),
            ValidationError::MissingStopParams
        );

        let mut only_stop = params("stop-limit");
        only_stop.stop_price = Some(dec!(2950));
        assert_eq!(
            OrderRequest::build(&only_stop).unwrap_err(),
            ValidationError::MissingStopParams
        );

        assert_eq!(
            OrderRequest::build(&params("stop-limit")).unwrap_err(),
            ValidationError::MissingStopParams
        );
    }

    #[test]
    fn build_stop_limit_with_both_prices() {
        let mut p = params("stop-limit");
        p.price = Some(dec!(3000));
        p.stop_price = Some(dec!(2950));

        let request = OrderRequest::build(&p).unwrap();
        assert_eq!(
            request.kind(),
            &OrderKind::StopLimit {
                price: Price::try_new(dec!(3000), "price").unwrap(),
                stop_price: Price::try_new(dec!(2950), "stop_price").unwrap(),
            }
        );
    }

    #[test]
    fn build_rejects_invalid_side_before_order_type() {
        let mut p = params("bogus");
        p.side = "hold".to_string();

        assert!(matches!(
            OrderRequest::build(&p),
            Err(ValidationError::InvalidSide { .. })
        ));
    }

    #[test]
    fn build_rejects_unsupported_order_type() {
        assert!(matches!(
            OrderRequest::build(&params("trailing-stop")),
            Err(ValidationError::UnsupportedOrderType { .. })
        ));
    }

    // The interactive prompt used to warn on a non-positive quantity and
    // submit anyway. Building a request now refuses it outright.
    #[test]
    fn build_rejects_non_positive_quantity() {
        let mut zero = params("market");
        zero.quantity = Decimal::ZERO;
        assert_eq!(
            OrderRequest::build(&zero).unwrap_err(),
            ValidationError::InvalidQuantity {
                quantity: Decimal::ZERO
            }
        );

        let mut negative = params("market");
        negative.quantity = dec!(-0.5);
        assert!(matches!(
            OrderRequest::build(&negative),
            Err(ValidationError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn build_rejects_non_positive_prices() {
        let mut p = params("stop-limit");
        p.price = Some(dec!(3000));
        p.stop_price = Some(dec!(-1));

        assert_eq!(
            OrderRequest::build(&p).unwrap_err(),
            ValidationError::InvalidPrice {
                field: "stop_price",
                value: dec!(-1)
            }
        );
    }

    #[test]
    fn build_rejects_empty_symbol() {
        let mut p = params("market");
        p.symbol = "  ".to_string();

        assert!(matches!(
            OrderRequest::build(&p),
            Err(ValidationError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn build_is_idempotent() {
        let mut p = params("stop-limit");
        p.price = Some(dec!(3000));
        p.stop_price = Some(dec!(2950));

        let first = OrderRequest::build(&p).unwrap();
        let second = OrderRequest::build(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn constructors_match_build() {
        let mut p = params("limit");
        p.price = Some(dec!(100));

        let built = OrderRequest::build(&p).unwrap();
        let constructed = OrderRequest::limit(
            Symbol::new("BTCUSDT"),
            OrderSide::Buy,
            Quantity::try_new(dec!(0.01)).unwrap(),
            Price::try_new(dec!(100), "price").unwrap(),
        );
        assert_eq!(built, constructed);
    }
}
