use async_trait::async_trait;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use super::cash_model::CashAccount;
use crate::Result;

/// Trait defining the contract for cash account repository operations.
///
/// The `*_in_tx` methods run on the writer's connection inside an open
/// transaction and are composed with lot and trade mutations by the
/// trade executor.
#[async_trait]
pub trait CashRepositoryTrait: Send + Sync {
    fn get_account(&self) -> Result<CashAccount>;
    fn get_in_tx(&self, conn: &mut SqliteConnection) -> Result<CashAccount>;
    fn set_balance_in_tx(
        &self,
        conn: &mut SqliteConnection,
        balance: Decimal,
    ) -> Result<CashAccount>;
    /// Creates the account with the given balance if it does not exist yet.
    async fn ensure_account(&self, initial_balance: Decimal) -> Result<CashAccount>;
    /// Administrative override: sets the balance unconditionally.
    async fn reset(&self, initial_balance: Decimal) -> Result<CashAccount>;
}

/// Trait defining the contract for cash account service operations.
#[async_trait]
pub trait CashServiceTrait: Send + Sync {
    fn get_account(&self) -> Result<CashAccount>;
    fn get_balance(&self) -> Result<Decimal>;
    /// Resets the balance to the configured initial value. This is an
    /// administrative action, not a trade: no trade record is written.
    async fn reset_balance(&self) -> Result<CashAccount>;
}
