use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;
use rust_decimal::Decimal;

use super::cash_model::{CashAccount, CashAccountDB};
use super::cash_traits::CashRepositoryTrait;
use crate::constants::CASH_ACCOUNT_ID;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::DatabaseError;
use crate::schema::cash_accounts;
use crate::utils::format_timestamp;
use crate::{Error, Result};

/// Repository for the single cash account row.
pub struct CashRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CashRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load(conn: &mut SqliteConnection) -> Result<CashAccount> {
        let account_db = cash_accounts::table
            .find(CASH_ACCOUNT_ID)
            .select(CashAccountDB::as_select())
            .first::<CashAccountDB>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::Database(DatabaseError::NotFound(
                    "Cash account has not been initialized".to_string(),
                )),
                other => Error::from(other),
            })?;
        Ok(CashAccount::from(account_db))
    }

    fn write_balance(conn: &mut SqliteConnection, balance: Decimal) -> Result<CashAccount> {
        let now = format_timestamp(&Utc::now());
        diesel::update(cash_accounts::table.find(CASH_ACCOUNT_ID))
            .set((
                cash_accounts::balance.eq(balance.to_string()),
                cash_accounts::updated_at.eq(&now),
            ))
            .execute(conn)?;
        Self::load(conn)
    }
}

#[async_trait]
impl CashRepositoryTrait for CashRepository {
    fn get_account(&self) -> Result<CashAccount> {
        let mut conn = get_connection(&self.pool)?;
        Self::load(&mut conn)
    }

    fn get_in_tx(&self, conn: &mut SqliteConnection) -> Result<CashAccount> {
        Self::load(conn)
    }

    fn set_balance_in_tx(
        &self,
        conn: &mut SqliteConnection,
        balance: Decimal,
    ) -> Result<CashAccount> {
        Self::write_balance(conn, balance)
    }

    async fn ensure_account(&self, initial_balance: Decimal) -> Result<CashAccount> {
        self.writer
            .exec(move |conn| {
                let existing = cash_accounts::table
                    .find(CASH_ACCOUNT_ID)
                    .select(CashAccountDB::as_select())
                    .first::<CashAccountDB>(conn)
                    .optional()?;

                if let Some(account_db) = existing {
                    return Ok(CashAccount::from(account_db));
                }

                let now = format_timestamp(&Utc::now());
                let account_db = CashAccountDB {
                    id: CASH_ACCOUNT_ID.to_string(),
                    balance: initial_balance.to_string(),
                    created_at: now.clone(),
                    updated_at: now,
                };
                diesel::insert_into(cash_accounts::table)
                    .values(&account_db)
                    .execute(conn)?;

                info!("Created cash account with balance {}", initial_balance);
                Ok(CashAccount::from(account_db))
            })
            .await
    }

    async fn reset(&self, initial_balance: Decimal) -> Result<CashAccount> {
        self.writer
            .exec(move |conn| Self::write_balance(conn, initial_balance))
            .await
    }
}
