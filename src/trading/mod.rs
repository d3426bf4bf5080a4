//! Trading module - validates and executes buy/sell requests against the
//! ledger.

mod trading_errors;
mod trading_model;
mod trading_service;
mod trading_traits;

#[cfg(test)]
mod trading_model_tests;

pub use trading_errors::TradingError;
pub use trading_model::TradeExecution;
pub use trading_service::TradingService;
pub use trading_traits::TradingServiceTrait;
