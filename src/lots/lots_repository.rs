use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use super::lots_model::{Lot, LotDB, NewLot};
use super::lots_traits::LotRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DatabaseError;
use crate::schema::lots;
use crate::utils::format_timestamp;
use crate::{Error, Result};

/// Repository for managing lot data in the database.
pub struct LotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Lot>> {
        let lots_db = lots::table
            .select(LotDB::as_select())
            .order((lots::buy_date.asc(), lots::created_at.asc()))
            .load::<LotDB>(conn)?;
        Ok(lots_db.into_iter().map(Lot::from).collect())
    }

    fn load_for_symbol(conn: &mut SqliteConnection, symbol: &str) -> Result<Vec<Lot>> {
        let lots_db = lots::table
            .filter(lots::symbol.eq(symbol))
            .select(LotDB::as_select())
            .order((lots::buy_date.asc(), lots::created_at.asc()))
            .load::<LotDB>(conn)?;
        Ok(lots_db.into_iter().map(Lot::from).collect())
    }
}

#[async_trait]
impl LotRepositoryTrait for LotRepository {
    fn get_lots(&self) -> Result<Vec<Lot>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_all(&mut conn)
    }

    fn get_lots_for_symbol(&self, symbol: &str) -> Result<Vec<Lot>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_for_symbol(&mut conn, symbol)
    }

    fn get_lots_for_symbol_in_tx(
        &self,
        conn: &mut SqliteConnection,
        symbol: &str,
    ) -> Result<Vec<Lot>> {
        Self::load_for_symbol(conn, symbol)
    }

    fn insert_in_tx(&self, conn: &mut SqliteConnection, new_lot: NewLot) -> Result<Lot> {
        let lot_db = LotDB {
            id: Uuid::new_v4().to_string(),
            symbol: new_lot.symbol,
            quantity: new_lot.quantity,
            buy_price: new_lot.buy_price.to_string(),
            buy_date: format_timestamp(&new_lot.buy_date),
            created_at: format_timestamp(&Utc::now()),
        };

        diesel::insert_into(lots::table)
            .values(&lot_db)
            .execute(conn)?;

        debug!(
            "Created lot {} ({} x {})",
            lot_db.id, lot_db.symbol, lot_db.quantity
        );
        Ok(Lot::from(lot_db))
    }

    fn update_quantity_in_tx(
        &self,
        conn: &mut SqliteConnection,
        lot_id: &str,
        quantity: i64,
    ) -> Result<()> {
        let updated = diesel::update(lots::table.find(lot_id))
            .set(lots::quantity.eq(quantity))
            .execute(conn)?;
        if updated == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Lot {} not found",
                lot_id
            ))));
        }
        Ok(())
    }

    fn delete_in_tx(&self, conn: &mut SqliteConnection, lot_id: &str) -> Result<()> {
        let deleted = diesel::delete(lots::table.find(lot_id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Lot {} not found",
                lot_id
            ))));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(|conn| Ok(diesel::delete(lots::table).execute(conn)?))
            .await
    }
}
