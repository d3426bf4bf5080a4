//! Trades module - the append-only trade log.

mod trades_model;
mod trades_repository;
mod trades_traits;

pub use trades_model::{NewTradeRecord, TradeRecord, TradeRecordDB, TradeSide};
pub use trades_repository::TradeRepository;
pub use trades_traits::TradeRepositoryTrait;
