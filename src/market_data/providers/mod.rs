//! Market data provider implementations.

mod yahoo_provider;

pub use yahoo_provider::YahooProvider;
