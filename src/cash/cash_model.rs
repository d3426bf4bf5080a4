use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{format_timestamp, parse_decimal_tolerant, parse_timestamp_tolerant};

/// Domain model for the simulated cash account.
///
/// The balance is only ever changed by trade execution (debit on buy,
/// credit on sell) or by an administrative reset; resets write no trade
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashAccount {
    pub id: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for cash accounts
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashAccountDB {
    pub id: String,
    pub balance: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CashAccountDB> for CashAccount {
    fn from(db: CashAccountDB) -> Self {
        CashAccount {
            balance: parse_decimal_tolerant(&db.balance, "cash balance"),
            created_at: parse_timestamp_tolerant(&db.created_at, "cash created_at"),
            updated_at: parse_timestamp_tolerant(&db.updated_at, "cash updated_at"),
            id: db.id,
        }
    }
}

impl From<&CashAccount> for CashAccountDB {
    fn from(account: &CashAccount) -> Self {
        CashAccountDB {
            id: account.id.clone(),
            balance: account.balance.to_string(),
            created_at: format_timestamp(&account.created_at),
            updated_at: format_timestamp(&account.updated_at),
        }
    }
}
