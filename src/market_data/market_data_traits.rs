use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::market_data_errors::MarketDataError;
use super::market_data_model::Quote;

/// Contract implemented by market data sources.
///
/// Implementations fetch from an external service and map its failure
/// modes into [`MarketDataError`]. They do not hold any store lock and
/// are called before any ledger mutation begins.
#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    fn id(&self) -> &'static str;

    /// Fetch the latest available quote for a symbol.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch historical daily quotes for a symbol, ordered by timestamp
    /// ascending. Both bounds are inclusive.
    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;
}

/// Service-level price oracle consumed by the trading, portfolio,
/// watchlist, and performance services.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
