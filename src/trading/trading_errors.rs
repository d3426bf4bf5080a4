use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that reject a trade before any ledger mutation. Every variant
/// leaves the ledger exactly as it was.
#[derive(Error, Debug)]
pub enum TradingError {
    /// The price oracle returned nothing, errored, or timed out.
    #[error("No price available for {symbol}: {reason}")]
    PriceUnavailable { symbol: String, reason: String },

    /// Buy cost exceeds the available cash balance.
    #[error("Insufficient funds: cost {required} exceeds balance {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    /// Sell quantity exceeds the total held across open lots.
    #[error("Insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: i64,
        held: i64,
    },

    #[error("Quantity must be a positive number of shares, got {0}")]
    InvalidQuantity(i64),

    #[error("Ticker symbol cannot be empty")]
    InvalidSymbol,
}
