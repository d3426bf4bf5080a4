use async_trait::async_trait;

use super::portfolio_model::PortfolioSummary;
use crate::trades::TradeRecord;
use crate::Result;

/// Trait defining the contract for read-only portfolio views and the
/// administrative wipes of the two ledger relations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Values every open lot at the current market price. Per-symbol
    /// oracle failures surface as row errors, not as a failed view.
    async fn get_portfolio(&self) -> Result<PortfolioSummary>;

    /// Full trade log, oldest first.
    fn get_trade_history(&self) -> Result<Vec<TradeRecord>>;

    /// Administrative wipe of all open lots. Returns the number removed.
    async fn reset_portfolio(&self) -> Result<usize>;

    /// Administrative wipe of the trade log. Returns the number removed.
    async fn reset_trade_history(&self) -> Result<usize>;
}
