use async_trait::async_trait;

use super::watchlist_model::{WatchlistEntry, WatchlistQuote};
use crate::Result;

/// Trait defining the contract for watchlist repository operations.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    /// Entries ordered by when they were added.
    fn list(&self) -> Result<Vec<WatchlistEntry>>;

    /// Inserts a ticker; `WatchlistError::AlreadyWatched` on duplicate.
    async fn add(&self, ticker: &str) -> Result<WatchlistEntry>;

    /// Removes a ticker; `WatchlistError::NotWatched` when absent.
    async fn remove(&self, ticker: &str) -> Result<()>;
}

/// Trait defining the contract for watchlist service operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    async fn add(&self, ticker: &str) -> Result<WatchlistEntry>;
    async fn remove(&self, ticker: &str) -> Result<()>;
    fn list(&self) -> Result<Vec<WatchlistEntry>>;

    /// The watchlist enriched with the latest price and day-over-day
    /// change per ticker. Oracle failures surface per row.
    async fn list_with_quotes(&self) -> Result<Vec<WatchlistQuote>>;
}
