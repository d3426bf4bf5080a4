use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use super::market_data_errors::MarketDataError;
use super::market_data_model::Quote;
use super::market_data_traits::{MarketDataProviderTrait, MarketDataServiceTrait};
use crate::constants::MARKET_DATA_TIMEOUT_SECS;

/// Price oracle facade over a [`MarketDataProviderTrait`].
///
/// Applies a request timeout so a hung provider surfaces as
/// [`MarketDataError::Timeout`] instead of blocking the caller; the
/// trading layer maps that, like every other oracle failure, to a
/// rejected operation with no state change.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProviderTrait>,
    timeout: Duration,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProviderTrait>) -> Self {
        Self::with_timeout(provider, Duration::from_secs(MARKET_DATA_TIMEOUT_SECS))
    }

    pub fn with_timeout(provider: Arc<dyn MarketDataProviderTrait>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    fn timeout_error(&self) -> MarketDataError {
        MarketDataError::Timeout {
            provider: self.provider.id().to_string(),
        }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching latest quote for {}", symbol);
        match tokio::time::timeout(self.timeout, self.provider.get_latest_quote(symbol)).await {
            Ok(result) => result,
            Err(_) => Err(self.timeout_error()),
        }
    }

    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError> {
        debug!(
            "Fetching historical quotes for {} from {} to {}",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        match tokio::time::timeout(
            self.timeout,
            self.provider.get_historical_quotes(symbol, start, end),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(self.timeout_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait]
    impl MarketDataProviderTrait for SlowProvider {
        fn id(&self) -> &'static str {
            "SLOW"
        }

        async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
            tokio::time::sleep(self.delay).await;
            Ok(Quote {
                symbol: symbol.to_string(),
                timestamp: Utc::now(),
                open: None,
                high: None,
                low: None,
                close: dec!(100),
                adjclose: None,
                volume: None,
            })
        }

        async fn get_historical_quotes(
            &self,
            _symbol: &str,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<Vec<Quote>, MarketDataError> {
            tokio::time::sleep(self.delay).await;
            Err(MarketDataError::NoDataForRange)
        }
    }

    #[tokio::test]
    async fn hung_provider_surfaces_as_timeout() {
        let provider = Arc::new(SlowProvider {
            delay: Duration::from_millis(200),
        });
        let service = MarketDataService::with_timeout(provider, Duration::from_millis(10));

        let result = service.get_latest_quote("AAPL").await;

        assert!(matches!(result, Err(MarketDataError::Timeout { .. })));
    }

    #[tokio::test]
    async fn fast_provider_passes_through() {
        let provider = Arc::new(SlowProvider {
            delay: Duration::from_millis(0),
        });
        let service = MarketDataService::with_timeout(provider, Duration::from_secs(1));

        let quote = service.get_latest_quote("AAPL").await.unwrap();

        assert_eq!(quote.close, dec!(100));
        assert_eq!(quote.symbol, "AAPL");
    }
}
