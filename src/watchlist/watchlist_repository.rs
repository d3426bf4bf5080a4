use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use uuid::Uuid;

use super::watchlist_errors::WatchlistError;
use super::watchlist_model::{WatchlistEntry, WatchlistEntryDB};
use super::watchlist_traits::WatchlistRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::schema::watchlist;
use crate::utils::format_timestamp;
use crate::{Error, Result};

/// Repository for managing watchlist entries in the database.
pub struct WatchlistRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WatchlistRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for WatchlistRepository {
    fn list(&self) -> Result<Vec<WatchlistEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let entries_db = watchlist::table
            .select(WatchlistEntryDB::as_select())
            .order((watchlist::added_date.asc(), watchlist::ticker.asc()))
            .load::<WatchlistEntryDB>(&mut conn)?;

        Ok(entries_db.into_iter().map(WatchlistEntry::from).collect())
    }

    async fn add(&self, ticker: &str) -> Result<WatchlistEntry> {
        let ticker = ticker.to_string();
        self.writer
            .exec(move |conn| {
                let entry_db = WatchlistEntryDB {
                    id: Uuid::new_v4().to_string(),
                    ticker: ticker.clone(),
                    added_date: format_timestamp(&Utc::now()),
                };

                diesel::insert_into(watchlist::table)
                    .values(&entry_db)
                    .execute(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::DatabaseError(
                            diesel::result::DatabaseErrorKind::UniqueViolation,
                            _,
                        ) => Error::Watchlist(WatchlistError::AlreadyWatched(ticker.clone())),
                        other => Error::from(other),
                    })?;

                debug!("Added {} to watchlist", entry_db.ticker);
                Ok(WatchlistEntry::from(entry_db))
            })
            .await
    }

    async fn remove(&self, ticker: &str) -> Result<()> {
        let ticker = ticker.to_string();
        self.writer
            .exec(move |conn| {
                let deleted =
                    diesel::delete(watchlist::table.filter(watchlist::ticker.eq(&ticker)))
                        .execute(conn)?;
                if deleted == 0 {
                    return Err(Error::Watchlist(WatchlistError::NotWatched(ticker)));
                }
                debug!("Removed {} from watchlist", ticker);
                Ok(())
            })
            .await
    }
}
