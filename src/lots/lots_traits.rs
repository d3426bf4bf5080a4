use async_trait::async_trait;
use diesel::SqliteConnection;

use super::lots_model::{Lot, NewLot};
use crate::Result;

/// Trait defining the contract for lot repository operations.
///
/// All queries return lots ordered oldest-first (`buy_date`, then
/// `created_at` for same-instant purchases), which is the consumption
/// order the trade executor relies on. The `*_in_tx` methods run inside
/// the writer's open transaction.
#[async_trait]
pub trait LotRepositoryTrait: Send + Sync {
    fn get_lots(&self) -> Result<Vec<Lot>>;
    fn get_lots_for_symbol(&self, symbol: &str) -> Result<Vec<Lot>>;

    fn get_lots_for_symbol_in_tx(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
    ) -> Result<Vec<Lot>>;
    fn insert_in_tx(&self, conn: &mut SqliteConnection, new_lot: NewLot) -> Result<Lot>;
    fn update_quantity_in_tx(
        &self,
        conn: &mut SqliteConnection,
        lot_id: &str,
        quantity: i64,
    ) -> Result<()>;
    fn delete_in_tx(&self, conn: &mut SqliteConnection, lot_id: &str) -> Result<()>;

    /// Administrative wipe of all open lots. Returns the number deleted.
    async fn delete_all(&self) -> Result<usize>;
}
