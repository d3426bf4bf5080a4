use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use super::trades_model::{NewTradeRecord, TradeRecord, TradeRecordDB};
use super::trades_traits::TradeRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::schema::trades;
use crate::utils::format_timestamp;
use crate::Result;

/// Repository for the append-only trade log.
pub struct TradeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn get_trades(&self) -> Result<Vec<TradeRecord>> {
        let mut conn = get_connection(&self.pool)?;

        // UUID v7 ids are time-ordered, so the secondary sort keeps
        // same-instant trades in insertion order.
        let trades_db = trades::table
            .select(TradeRecordDB::as_select())
            .order((trades::trade_date.asc(), trades::id.asc()))
            .load::<TradeRecordDB>(&mut conn)?;

        Ok(trades_db.into_iter().map(TradeRecord::from).collect())
    }

    fn append_in_tx(
        &self,
        conn: &mut SqliteConnection,
        trade: NewTradeRecord,
    ) -> Result<TradeRecord> {
        let trade_db = TradeRecordDB {
            id: Uuid::now_v7().to_string(),
            symbol: trade.symbol,
            quantity: trade.quantity,
            side: trade.side.as_str().to_string(),
            price: trade.price.to_string(),
            trade_date: format_timestamp(&trade.trade_date),
        };

        diesel::insert_into(trades::table)
            .values(&trade_db)
            .execute(conn)?;

        debug!(
            "Appended {} trade {} ({} x {})",
            trade_db.side, trade_db.id, trade_db.symbol, trade_db.quantity
        );
        Ok(TradeRecord::from(trade_db))
    }

    async fn delete_all(&self) -> Result<usize> {
        self.writer
            .exec(|conn| Ok(diesel::delete(trades::table).execute(conn)?))
            .await
    }
}
