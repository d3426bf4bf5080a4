use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{format_timestamp, parse_decimal_tolerant, parse_timestamp_tolerant};

/// Side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    pub fn from_str_tolerant(value: &str) -> Self {
        match value {
            "SELL" => TradeSide::Sell,
            "BUY" => TradeSide::Buy,
            other => {
                log::error!("Unknown trade side '{}'. Falling back to BUY.", other);
                TradeSide::Buy
            }
        }
    }
}

/// Domain model for one executed trade. Records are append-only: they
/// are never mutated or deleted outside the administrative history wipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub symbol: String,
    pub quantity: i64,
    pub side: TradeSide,
    pub price: Decimal,
    pub trade_date: DateTime<Utc>,
}

/// Input model for appending a trade record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTradeRecord {
    pub symbol: String,
    pub quantity: i64,
    pub side: TradeSide,
    pub price: Decimal,
    pub trade_date: DateTime<Utc>,
}

/// Database model for trade records
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeRecordDB {
    pub id: String,
    pub symbol: String,
    pub quantity: i64,
    pub side: String,
    pub price: String,
    pub trade_date: String,
}

impl From<TradeRecordDB> for TradeRecord {
    fn from(db: TradeRecordDB) -> Self {
        TradeRecord {
            side: TradeSide::from_str_tolerant(&db.side),
            price: parse_decimal_tolerant(&db.price, "trade price"),
            trade_date: parse_timestamp_tolerant(&db.trade_date, "trade_date"),
            id: db.id,
            symbol: db.symbol,
            quantity: db.quantity,
        }
    }
}

impl From<&TradeRecord> for TradeRecordDB {
    fn from(trade: &TradeRecord) -> Self {
        TradeRecordDB {
            id: trade.id.clone(),
            symbol: trade.symbol.clone(),
            quantity: trade.quantity,
            side: trade.side.as_str().to_string(),
            price: trade.price.to_string(),
            trade_date: format_timestamp(&trade.trade_date),
        }
    }
}
