use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One market data observation for a symbol.
///
/// `close` is always present; the remaining OHLCV fields are optional
/// because intraday snapshots and some providers omit them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,

    /// Closing/current price (required).
    pub close: Decimal,

    /// Dividend/split adjusted close, when the provider supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjclose: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl Quote {
    /// Price to use for return calculations: adjusted close when
    /// available, raw close otherwise.
    pub fn effective_close(&self) -> Decimal {
        self.adjclose.unwrap_or(self.close)
    }
}
