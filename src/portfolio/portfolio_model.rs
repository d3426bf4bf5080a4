use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::lots::Lot;

/// One row of the portfolio view: an open lot valued at the current
/// market price. When the price oracle fails for the lot's symbol the
/// valuation fields are `None` and `price_error` says why; the rest of
/// the view is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub lot_id: String,
    pub symbol: String,
    pub quantity: i64,
    pub buy_price: Decimal,
    pub buy_date: DateTime<Utc>,
    pub cost_basis: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_pl: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_pl_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_error: Option<String>,
}

impl Holding {
    pub fn priced(lot: &Lot, current_price: Decimal) -> Self {
        let cost_basis = lot.cost_basis();
        let market_value = current_price * Decimal::from(lot.quantity);
        let unrealized_pl = market_value - cost_basis;
        let unrealized_pl_percent = if cost_basis.is_zero() {
            None
        } else {
            Some((unrealized_pl / cost_basis * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION))
        };

        Holding {
            lot_id: lot.id.clone(),
            symbol: lot.symbol.clone(),
            quantity: lot.quantity,
            buy_price: lot.buy_price,
            buy_date: lot.buy_date,
            cost_basis,
            current_price: Some(current_price),
            market_value: Some(market_value),
            unrealized_pl: Some(unrealized_pl),
            unrealized_pl_percent,
            price_error: None,
        }
    }

    pub fn unpriced(lot: &Lot, error: String) -> Self {
        Holding {
            lot_id: lot.id.clone(),
            symbol: lot.symbol.clone(),
            quantity: lot.quantity,
            buy_price: lot.buy_price,
            buy_date: lot.buy_date,
            cost_basis: lot.cost_basis(),
            current_price: None,
            market_value: None,
            unrealized_pl: None,
            unrealized_pl_percent: None,
            price_error: Some(error),
        }
    }
}

/// The full portfolio view: per-lot rows plus aggregates and the cash
/// balance. Market-value aggregates cover priced rows only;
/// `total_invested` covers every open lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub holdings: Vec<Holding>,
    pub total_invested: Decimal,
    pub total_market_value: Decimal,
    pub total_unrealized_pl: Decimal,
    pub cash_balance: Decimal,
}
