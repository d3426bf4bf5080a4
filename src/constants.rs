//! Application-wide constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Row ID of the single cash account.
pub const CASH_ACCOUNT_ID: &str = "default";

/// Balance the cash account is created with and reset to.
pub const INITIAL_CASH_BALANCE: Decimal = dec!(100000);

/// Trading days per year, used to annualize daily return statistics.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Decimal precision for display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default timeout for market data requests, in seconds.
pub const MARKET_DATA_TIMEOUT_SECS: u64 = 10;
