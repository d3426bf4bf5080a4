#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::market_data::{MarketDataError, MarketDataServiceTrait, Quote};
    use crate::watchlist::{
        WatchlistEntry, WatchlistError, WatchlistRepositoryTrait, WatchlistService,
        WatchlistServiceTrait,
    };
    use crate::{Error, Result};

    // --- Mock watchlist repository ---
    struct MockWatchlistRepository {
        entries: Arc<Mutex<Vec<WatchlistEntry>>>,
    }

    impl MockWatchlistRepository {
        fn new() -> Self {
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl WatchlistRepositoryTrait for MockWatchlistRepository {
        fn list(&self) -> Result<Vec<WatchlistEntry>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn add(&self, ticker: &str) -> Result<WatchlistEntry> {
            let mut entries = self.entries.lock().unwrap();
            if entries.iter().any(|e| e.ticker == ticker) {
                return Err(WatchlistError::AlreadyWatched(ticker.to_string()).into());
            }
            let entry = WatchlistEntry {
                id: format!("wl-{}", entries.len()),
                ticker: ticker.to_string(),
                added_date: Utc::now(),
            };
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn remove(&self, ticker: &str) -> Result<()> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.ticker != ticker);
            if entries.len() == before {
                return Err(WatchlistError::NotWatched(ticker.to_string()).into());
            }
            Ok(())
        }
    }

    // --- Mock market data service ---
    struct MockMarketDataService {
        // ticker -> ordered daily closes, newest last
        closes: HashMap<String, Vec<Decimal>>,
    }

    impl MockMarketDataService {
        fn with_closes(pairs: &[(&str, &[Decimal])]) -> Self {
            Self {
                closes: pairs
                    .iter()
                    .map(|(ticker, closes)| (ticker.to_string(), closes.to_vec()))
                    .collect(),
            }
        }

        fn quote(symbol: &str, close: Decimal, age_days: i64) -> Quote {
            Quote {
                symbol: symbol.to_string(),
                timestamp: Utc::now() - Duration::days(age_days),
                open: None,
                high: None,
                low: None,
                close,
                adjclose: None,
                volume: None,
            }
        }
    }

    #[async_trait]
    impl MarketDataServiceTrait for MockMarketDataService {
        async fn get_latest_quote(&self, symbol: &str) -> std::result::Result<Quote, MarketDataError> {
            match self.closes.get(symbol).and_then(|closes| closes.last()) {
                Some(close) => Ok(Self::quote(symbol, *close, 0)),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }

        async fn get_historical_quotes(
            &self,
            symbol: &str,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> std::result::Result<Vec<Quote>, MarketDataError> {
            match self.closes.get(symbol) {
                Some(closes) if !closes.is_empty() => Ok(closes
                    .iter()
                    .enumerate()
                    .map(|(i, close)| {
                        Self::quote(symbol, *close, (closes.len() - 1 - i) as i64)
                    })
                    .collect()),
                _ => Err(MarketDataError::NoDataForRange),
            }
        }
    }

    fn service(pairs: &[(&str, &[Decimal])]) -> WatchlistService {
        WatchlistService::new(
            Arc::new(MockWatchlistRepository::new()),
            Arc::new(MockMarketDataService::with_closes(pairs)),
        )
    }

    #[tokio::test]
    async fn add_normalizes_ticker() {
        let service = service(&[]);

        let entry = service.add("  aapl ").await.unwrap();

        assert_eq!(entry.ticker, "AAPL");
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_without_mutation() {
        let service = service(&[]);
        service.add("AAPL").await.unwrap();

        let result = service.add("aapl").await;

        assert!(matches!(
            result,
            Err(Error::Watchlist(WatchlistError::AlreadyWatched(_)))
        ));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_ticker_is_rejected() {
        let service = service(&[]);

        let result = service.add("   ").await;

        assert!(matches!(
            result,
            Err(Error::Watchlist(WatchlistError::InvalidTicker))
        ));
    }

    #[tokio::test]
    async fn removing_unwatched_ticker_errors() {
        let service = service(&[]);

        let result = service.remove("MSFT").await;

        assert!(matches!(
            result,
            Err(Error::Watchlist(WatchlistError::NotWatched(_)))
        ));
    }

    #[tokio::test]
    async fn quotes_view_reports_price_and_day_change() {
        let closes = [dec!(100), dec!(110)];
        let service = service(&[("AAPL", &closes[..])]);
        service.add("AAPL").await.unwrap();

        let rows = service.list_with_quotes().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].current_price, Some(dec!(110)));
        assert_eq!(rows[0].day_change_percent, Some(dec!(10)));
        assert!(rows[0].error.is_none());
    }

    #[tokio::test]
    async fn unknown_ticker_surfaces_row_error() {
        let service = service(&[]);
        service.add("GONE").await.unwrap();

        let rows = service.list_with_quotes().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].current_price.is_none());
        assert!(rows[0].error.is_some());
    }
}
