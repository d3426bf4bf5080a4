//! Parsing helpers for values stored as TEXT in SQLite.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, falling back to zero on malformed data.
///
/// Stored values are written by this library and should always parse; a
/// failure indicates a corrupted row, which is logged rather than made
/// fatal for the whole result set.
pub fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as Decimal (err: {}). Falling back to ZERO.",
                field_name,
                value_str,
                e
            );
            Decimal::ZERO
        }
    }
}

/// Parses a stored RFC 3339 timestamp, falling back to the Unix epoch on
/// malformed data.
pub fn parse_timestamp_tolerant(value_str: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value_str) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as RFC 3339 timestamp (err: {}). Falling back to epoch.",
                field_name,
                value_str,
                e
            );
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

/// Formats a timestamp for TEXT storage.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Canonical form of a user-entered ticker symbol. May be empty; the
/// caller decides whether that is an error.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}
