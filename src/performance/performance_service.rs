use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use super::performance_model::{calculate_performance, PricePerformance};
use super::performance_traits::PerformanceServiceTrait;
use crate::errors::ValidationError;
use crate::market_data::MarketDataServiceTrait;
use crate::utils::normalize_symbol;
use crate::{Error, Result};

/// Computes return statistics for a symbol from the oracle's historical
/// daily series.
pub struct PerformanceService {
    market_data_service: Arc<dyn MarketDataServiceTrait>,
}

impl PerformanceService {
    pub fn new(market_data_service: Arc<dyn MarketDataServiceTrait>) -> Self {
        Self {
            market_data_service,
        }
    }
}

#[async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn price_performance(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PricePerformance> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Ticker symbol cannot be empty".to_string(),
            )));
        }

        let quotes = self
            .market_data_service
            .get_historical_quotes(&symbol, start, end)
            .await?;
        debug!(
            "Computing performance for {} over {} observations",
            symbol,
            quotes.len()
        );

        calculate_performance(&symbol, &quotes)
    }
}
