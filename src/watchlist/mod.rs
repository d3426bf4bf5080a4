//! Watchlist module - tracked tickers, independent of the ledger.

mod watchlist_errors;
mod watchlist_model;
mod watchlist_repository;
mod watchlist_service;
mod watchlist_traits;

#[cfg(test)]
mod watchlist_service_tests;

pub use watchlist_errors::WatchlistError;
pub use watchlist_model::{WatchlistEntry, WatchlistQuote};
pub use watchlist_repository::WatchlistRepository;
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
