use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use futures::future::join_all;
use log::{info, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::watchlist_errors::WatchlistError;
use super::watchlist_model::{WatchlistEntry, WatchlistQuote};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::market_data::MarketDataServiceTrait;
use crate::utils::normalize_symbol;
use crate::Result;

/// Lookback window for the day-over-day change: wide enough to span
/// weekends and market holidays.
const DAY_CHANGE_LOOKBACK_DAYS: i64 = 7;

/// Service for managing the watchlist and its market-data-enriched view.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    market_data_service: Arc<dyn MarketDataServiceTrait>,
}

impl WatchlistService {
    pub fn new(
        repository: Arc<dyn WatchlistRepositoryTrait>,
        market_data_service: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            repository,
            market_data_service,
        }
    }

    fn validate_ticker(ticker: &str) -> Result<String> {
        let ticker = normalize_symbol(ticker);
        if ticker.is_empty() {
            return Err(WatchlistError::InvalidTicker.into());
        }
        Ok(ticker)
    }

    /// Builds the display row for one ticker: latest price, plus the
    /// change versus the previous daily close when history is available.
    async fn quote_for(&self, ticker: String) -> WatchlistQuote {
        let current_price = match self.market_data_service.get_latest_quote(&ticker).await {
            Ok(quote) => quote.close,
            Err(e) => {
                warn!("No current price for watched ticker {}: {}", ticker, e);
                return WatchlistQuote {
                    ticker,
                    current_price: None,
                    day_change_percent: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let end = Utc::now();
        let start = end - Duration::days(DAY_CHANGE_LOOKBACK_DAYS);
        let day_change_percent = match self
            .market_data_service
            .get_historical_quotes(&ticker, start, end)
            .await
        {
            Ok(quotes) if quotes.len() > 1 => {
                let previous = quotes[quotes.len() - 2].close;
                let latest = quotes[quotes.len() - 1].close;
                if previous.is_zero() {
                    None
                } else {
                    Some(
                        ((latest - previous) / previous * Decimal::ONE_HUNDRED)
                            .round_dp(DISPLAY_DECIMAL_PRECISION),
                    )
                }
            }
            Ok(_) => None,
            Err(e) => {
                warn!("No daily history for watched ticker {}: {}", ticker, e);
                None
            }
        };

        WatchlistQuote {
            ticker,
            current_price: Some(current_price),
            day_change_percent,
            error: None,
        }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn add(&self, ticker: &str) -> Result<WatchlistEntry> {
        let ticker = Self::validate_ticker(ticker)?;
        let entry = self.repository.add(&ticker).await?;
        info!("Watching {}", entry.ticker);
        Ok(entry)
    }

    async fn remove(&self, ticker: &str) -> Result<()> {
        let ticker = Self::validate_ticker(ticker)?;
        self.repository.remove(&ticker).await?;
        info!("Stopped watching {}", ticker);
        Ok(())
    }

    fn list(&self) -> Result<Vec<WatchlistEntry>> {
        self.repository.list()
    }

    async fn list_with_quotes(&self) -> Result<Vec<WatchlistQuote>> {
        let entries = self.repository.list()?;
        let rows = entries
            .into_iter()
            .map(|entry| self.quote_for(entry.ticker));
        Ok(join_all(rows).await)
    }
}
