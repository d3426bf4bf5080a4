use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::constants::TRADING_DAYS_PER_YEAR;
use crate::market_data::{MarketDataError, Quote};
use crate::Result;

/// Return statistics for one symbol over a date range, annualized from
/// daily closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePerformance {
    pub symbol: String,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    /// Number of daily observations the statistics are computed from.
    pub observations: usize,
    pub annualized_return_percent: Decimal,
    pub volatility_percent: Decimal,
    /// Annualized return divided by volatility; `None` when volatility
    /// is zero.
    pub risk_adjusted_return: Option<Decimal>,
}

/// Computes annualized return, volatility, and risk-adjusted return
/// from a daily series ordered oldest-first.
///
/// Daily returns use the adjusted close when the provider supplies one.
/// Volatility is the population standard deviation of daily returns,
/// scaled by sqrt(252).
pub fn calculate_performance(symbol: &str, quotes: &[Quote]) -> Result<PricePerformance> {
    if quotes.len() < 2 {
        return Err(MarketDataError::NoDataForRange.into());
    }

    let mut daily_returns: Vec<Decimal> = Vec::with_capacity(quotes.len() - 1);
    for window in quotes.windows(2) {
        let previous = window[0].effective_close();
        let current = window[1].effective_close();
        if previous.is_zero() {
            continue;
        }
        daily_returns.push(current / previous - Decimal::ONE);
    }

    if daily_returns.is_empty() {
        return Err(MarketDataError::NoDataForRange.into());
    }

    let count = Decimal::from(daily_returns.len() as u64);
    let mean: Decimal = daily_returns.iter().sum::<Decimal>() / count;

    let annualized_return_percent =
        mean * Decimal::from(TRADING_DAYS_PER_YEAR) * Decimal::ONE_HUNDRED;

    let variance: Decimal = daily_returns
        .iter()
        .map(|r| (*r - mean) * (*r - mean))
        .sum::<Decimal>()
        / count;
    let volatility_percent = (variance * Decimal::from(TRADING_DAYS_PER_YEAR))
        .sqrt()
        .unwrap_or(Decimal::ZERO)
        * Decimal::ONE_HUNDRED;

    let risk_adjusted_return = if volatility_percent.is_zero() {
        None
    } else {
        Some(annualized_return_percent / volatility_percent)
    };

    Ok(PricePerformance {
        symbol: symbol.to_string(),
        period_start: quotes[0].timestamp,
        period_end: quotes[quotes.len() - 1].timestamp,
        observations: quotes.len(),
        annualized_return_percent,
        volatility_percent,
        risk_adjusted_return,
    })
}
