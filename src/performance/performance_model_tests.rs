//! Tests for the return statistics calculator.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::market_data::Quote;
    use crate::performance::calculate_performance;
    use crate::Error;

    fn quote(day: u32, close: Decimal) -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, day, 21, 0, 0).unwrap(),
            open: None,
            high: None,
            low: None,
            close,
            adjclose: None,
            volume: None,
        }
    }

    #[test]
    fn single_return_annualizes_with_zero_volatility() {
        let quotes = vec![quote(1, dec!(100)), quote(2, dec!(101))];

        let perf = calculate_performance("AAPL", &quotes).unwrap();

        // One daily return of 1%: mean * 252 * 100.
        assert_eq!(perf.annualized_return_percent, dec!(252));
        assert_eq!(perf.volatility_percent, Decimal::ZERO);
        assert_eq!(perf.risk_adjusted_return, None);
        assert_eq!(perf.observations, 2);
    }

    #[test]
    fn constant_series_has_zero_return_and_volatility() {
        let quotes = vec![quote(1, dec!(100)), quote(2, dec!(100)), quote(3, dec!(100))];

        let perf = calculate_performance("AAPL", &quotes).unwrap();

        assert_eq!(perf.annualized_return_percent, Decimal::ZERO);
        assert_eq!(perf.volatility_percent, Decimal::ZERO);
        assert_eq!(perf.risk_adjusted_return, None);
    }

    #[test]
    fn symmetric_swings_cancel_but_show_volatility() {
        // +10% then -10%: mean 0, variance 0.01.
        let quotes = vec![quote(1, dec!(100)), quote(2, dec!(110)), quote(3, dec!(99))];

        let perf = calculate_performance("AAPL", &quotes).unwrap();

        assert_eq!(perf.annualized_return_percent, Decimal::ZERO);
        // sqrt(0.01 * 252) * 100 ~ 158.75
        assert!(perf.volatility_percent > dec!(158));
        assert!(perf.volatility_percent < dec!(159));
        assert_eq!(perf.risk_adjusted_return, Some(Decimal::ZERO));
    }

    #[test]
    fn adjusted_close_preferred_over_raw_close() {
        let mut first = quote(1, dec!(200));
        first.adjclose = Some(dec!(100));
        let mut second = quote(2, dec!(202));
        second.adjclose = Some(dec!(101));

        let perf = calculate_performance("AAPL", &[first, second]).unwrap();

        assert_eq!(perf.annualized_return_percent, dec!(252));
    }

    #[test]
    fn fewer_than_two_quotes_is_rejected() {
        let result = calculate_performance("AAPL", &[quote(1, dec!(100))]);

        assert!(matches!(result, Err(Error::MarketData(_))));
    }
}
