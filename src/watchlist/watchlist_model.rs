use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{format_timestamp, parse_timestamp_tolerant};

/// Domain model for a watched ticker. Tickers are unique and carry no
/// accounting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: String,
    pub ticker: String,
    pub added_date: DateTime<Utc>,
}

/// A watchlist row enriched with market data for display: the latest
/// price and the day-over-day change. Either may be missing when the
/// oracle fails; `error` carries the reason when no price is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistQuote {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_change_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Database model for watchlist entries
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistEntryDB {
    pub id: String,
    pub ticker: String,
    pub added_date: String,
}

impl From<WatchlistEntryDB> for WatchlistEntry {
    fn from(db: WatchlistEntryDB) -> Self {
        WatchlistEntry {
            added_date: parse_timestamp_tolerant(&db.added_date, "watchlist added_date"),
            id: db.id,
            ticker: db.ticker,
        }
    }
}

impl From<&WatchlistEntry> for WatchlistEntryDB {
    fn from(entry: &WatchlistEntry) -> Self {
        WatchlistEntryDB {
            id: entry.id.clone(),
            ticker: entry.ticker.clone(),
            added_date: format_timestamp(&entry.added_date),
        }
    }
}
