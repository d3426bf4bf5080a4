use thiserror::Error;

/// Watchlist errors. `AlreadyWatched` is informational: nothing was
/// mutated and the entry is still present exactly once.
#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("{0} is already in the watchlist")]
    AlreadyWatched(String),

    #[error("{0} is not in the watchlist")]
    NotWatched(String),

    #[error("Ticker symbol cannot be empty")]
    InvalidTicker,
}
