//! Market data module - price oracle contract and providers.

mod market_data_errors;
mod market_data_model;
mod market_data_service;
mod market_data_traits;
pub mod providers;

pub use market_data_errors::MarketDataError;
pub use market_data_model::Quote;
pub use market_data_service::MarketDataService;
pub use market_data_traits::{MarketDataProviderTrait, MarketDataServiceTrait};
