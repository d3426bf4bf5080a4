use async_trait::async_trait;

use super::trading_model::TradeExecution;
use crate::Result;

/// Trait defining the contract for trade execution.
///
/// Both operations fetch the current price first, validate against the
/// cash balance or held quantity, and then apply all ledger effects
/// (lots, cash, trade log) as one transaction. A rejected trade changes
/// nothing.
#[async_trait]
pub trait TradingServiceTrait: Send + Sync {
    async fn buy(&self, symbol: &str, quantity: i64) -> Result<TradeExecution>;
    async fn sell(&self, symbol: &str, quantity: i64) -> Result<TradeExecution>;
}
