use async_trait::async_trait;
use diesel::SqliteConnection;

use super::trades_model::{NewTradeRecord, TradeRecord};
use crate::Result;

/// Trait defining the contract for trade log repository operations.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    /// Full log, ordered by trade date ascending (insertion order for
    /// same-instant trades).
    fn get_trades(&self) -> Result<Vec<TradeRecord>>;

    /// Appends one record inside the writer's open transaction. Called
    /// exactly once per executed buy or sell.
    fn append_in_tx(&self, conn: &mut SqliteConnection, trade: NewTradeRecord)
        -> Result<TradeRecord>;

    /// Administrative wipe of the whole log. Returns the number deleted.
    async fn delete_all(&self) -> Result<usize>;
}
