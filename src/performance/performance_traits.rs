use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::performance_model::PricePerformance;
use crate::Result;

/// Trait defining the contract for price performance statistics.
#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    /// Fetches the daily series for `symbol` over `[start, end]` and
    /// computes annualized return statistics from it. Read-only.
    async fn price_performance(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PricePerformance>;
}
