use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{format_timestamp, parse_decimal_tolerant, parse_timestamp_tolerant};

/// Domain model for an open lot: a discrete purchase of `quantity`
/// shares at `buy_price`, consumed oldest-first by later sells.
///
/// A lot's quantity is always positive; a sell that fully consumes a lot
/// deletes the row instead of leaving it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    pub symbol: String,
    pub quantity: i64,
    pub buy_price: Decimal,
    pub buy_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Lot {
    /// Amount paid for the shares still held in this lot.
    pub fn cost_basis(&self) -> Decimal {
        self.buy_price * Decimal::from(self.quantity)
    }
}

/// Input model for creating a new lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLot {
    pub symbol: String,
    pub quantity: i64,
    pub buy_price: Decimal,
    pub buy_date: DateTime<Utc>,
}

/// Database model for lots
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::lots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LotDB {
    pub id: String,
    pub symbol: String,
    pub quantity: i64,
    pub buy_price: String,
    pub buy_date: String,
    pub created_at: String,
}

impl From<LotDB> for Lot {
    fn from(db: LotDB) -> Self {
        Lot {
            buy_price: parse_decimal_tolerant(&db.buy_price, "lot buy_price"),
            buy_date: parse_timestamp_tolerant(&db.buy_date, "lot buy_date"),
            created_at: parse_timestamp_tolerant(&db.created_at, "lot created_at"),
            id: db.id,
            symbol: db.symbol,
            quantity: db.quantity,
        }
    }
}

impl From<&Lot> for LotDB {
    fn from(lot: &Lot) -> Self {
        LotDB {
            id: lot.id.clone(),
            symbol: lot.symbol.clone(),
            quantity: lot.quantity,
            buy_price: lot.buy_price.to_string(),
            buy_date: format_timestamp(&lot.buy_date),
            created_at: format_timestamp(&lot.created_at),
        }
    }
}
