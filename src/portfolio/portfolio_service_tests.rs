#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use diesel::SqliteConnection;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::cash::{CashAccount, CashRepositoryTrait};
    use crate::lots::{Lot, LotRepositoryTrait, NewLot};
    use crate::market_data::{MarketDataError, MarketDataServiceTrait, Quote};
    use crate::portfolio::{PortfolioService, PortfolioServiceTrait};
    use crate::trades::{NewTradeRecord, TradeRecord, TradeRepositoryTrait};
    use crate::Result;

    // --- Mock lot repository ---
    struct MockLotRepository {
        lots: Arc<Mutex<Vec<Lot>>>,
    }

    impl MockLotRepository {
        fn with_lots(lots: Vec<Lot>) -> Self {
            Self {
                lots: Arc::new(Mutex::new(lots)),
            }
        }
    }

    #[async_trait]
    impl LotRepositoryTrait for MockLotRepository {
        fn get_lots(&self) -> Result<Vec<Lot>> {
            Ok(self.lots.lock().unwrap().clone())
        }

        fn get_lots_for_symbol(&self, symbol: &str) -> Result<Vec<Lot>> {
            Ok(self
                .lots
                .lock()
                .unwrap()
                .iter()
                .filter(|lot| lot.symbol == symbol)
                .cloned()
                .collect())
        }

        fn get_lots_for_symbol_in_tx(
            &self,
            _conn: &mut SqliteConnection,
            _symbol: &str,
        ) -> Result<Vec<Lot>> {
            unimplemented!()
        }

        fn insert_in_tx(&self, _conn: &mut SqliteConnection, _new_lot: NewLot) -> Result<Lot> {
            unimplemented!()
        }

        fn update_quantity_in_tx(
            &self,
            _conn: &mut SqliteConnection,
            _lot_id: &str,
            _quantity: i64,
        ) -> Result<()> {
            unimplemented!()
        }

        fn delete_in_tx(&self, _conn: &mut SqliteConnection, _lot_id: &str) -> Result<()> {
            unimplemented!()
        }

        async fn delete_all(&self) -> Result<usize> {
            let mut lots = self.lots.lock().unwrap();
            let removed = lots.len();
            lots.clear();
            Ok(removed)
        }
    }

    // --- Mock trade repository ---
    struct MockTradeRepository {
        trades: Arc<Mutex<Vec<TradeRecord>>>,
    }

    impl MockTradeRepository {
        fn new() -> Self {
            Self {
                trades: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl TradeRepositoryTrait for MockTradeRepository {
        fn get_trades(&self) -> Result<Vec<TradeRecord>> {
            Ok(self.trades.lock().unwrap().clone())
        }

        fn append_in_tx(
            &self,
            _conn: &mut SqliteConnection,
            _trade: NewTradeRecord,
        ) -> Result<TradeRecord> {
            unimplemented!()
        }

        async fn delete_all(&self) -> Result<usize> {
            let mut trades = self.trades.lock().unwrap();
            let removed = trades.len();
            trades.clear();
            Ok(removed)
        }
    }

    // --- Mock cash repository ---
    struct MockCashRepository {
        balance: Decimal,
    }

    #[async_trait]
    impl CashRepositoryTrait for MockCashRepository {
        fn get_account(&self) -> Result<CashAccount> {
            Ok(CashAccount {
                id: "default".to_string(),
                balance: self.balance,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        fn get_in_tx(&self, _conn: &mut SqliteConnection) -> Result<CashAccount> {
            unimplemented!()
        }

        fn set_balance_in_tx(
            &self,
            _conn: &mut SqliteConnection,
            _balance: Decimal,
        ) -> Result<CashAccount> {
            unimplemented!()
        }

        async fn ensure_account(&self, _initial_balance: Decimal) -> Result<CashAccount> {
            unimplemented!()
        }

        async fn reset(&self, _initial_balance: Decimal) -> Result<CashAccount> {
            unimplemented!()
        }
    }

    // --- Mock market data service ---
    struct MockMarketDataService {
        prices: HashMap<String, Decimal>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockMarketDataService {
        fn with_prices(pairs: &[(&str, Decimal)]) -> Self {
            Self {
                prices: pairs
                    .iter()
                    .map(|(symbol, price)| (symbol.to_string(), *price))
                    .collect(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl MarketDataServiceTrait for MockMarketDataService {
        async fn get_latest_quote(&self, symbol: &str) -> std::result::Result<Quote, MarketDataError> {
            self.calls.lock().unwrap().push(symbol.to_string());
            match self.prices.get(symbol) {
                Some(price) => Ok(Quote {
                    symbol: symbol.to_string(),
                    timestamp: Utc::now(),
                    open: None,
                    high: None,
                    low: None,
                    close: *price,
                    adjclose: None,
                    volume: None,
                }),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }

        async fn get_historical_quotes(
            &self,
            _symbol: &str,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> std::result::Result<Vec<Quote>, MarketDataError> {
            unimplemented!()
        }
    }

    fn lot(id: &str, symbol: &str, quantity: i64, buy_price: Decimal, day: u32) -> Lot {
        let date = Utc.with_ymd_and_hms(2024, 2, day, 16, 0, 0).unwrap();
        Lot {
            id: id.to_string(),
            symbol: symbol.to_string(),
            quantity,
            buy_price,
            buy_date: date,
            created_at: date,
        }
    }

    fn service_with(
        lots: Vec<Lot>,
        balance: Decimal,
        prices: &[(&str, Decimal)],
    ) -> (PortfolioService, Arc<Mutex<Vec<String>>>) {
        let market_data = Arc::new(MockMarketDataService::with_prices(prices));
        let calls = Arc::clone(&market_data.calls);
        let service = PortfolioService::new(
            Arc::new(MockLotRepository::with_lots(lots)),
            Arc::new(MockTradeRepository::new()),
            Arc::new(MockCashRepository { balance }),
            market_data,
        );
        (service, calls)
    }

    #[tokio::test]
    async fn empty_ledger_returns_zero_aggregates() {
        let (service, _) = service_with(Vec::new(), dec!(100000), &[]);

        let summary = service.get_portfolio().await.unwrap();

        assert!(summary.holdings.is_empty());
        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.total_unrealized_pl, Decimal::ZERO);
        assert_eq!(summary.cash_balance, dec!(100000));
    }

    #[tokio::test]
    async fn values_lots_and_aggregates() {
        let lots = vec![
            lot("l1", "AAPL", 10, dec!(50), 1),
            lot("l2", "AAPL", 5, dec!(60), 2),
            lot("l3", "MSFT", 2, dec!(200), 3),
        ];
        let (service, calls) = service_with(lots, dec!(1000), &[("AAPL", dec!(70)), ("MSFT", dec!(150))]);

        let summary = service.get_portfolio().await.unwrap();

        assert_eq!(summary.holdings.len(), 3);
        // (70-50)*10 + (70-60)*5 + (150-200)*2
        assert_eq!(summary.total_unrealized_pl, dec!(150));
        assert_eq!(summary.total_invested, dec!(1200));
        assert_eq!(summary.total_market_value, dec!(1350));

        let first = &summary.holdings[0];
        assert_eq!(first.unrealized_pl, Some(dec!(200)));
        assert_eq!(first.market_value, Some(dec!(700)));

        // One oracle call per distinct symbol, not per lot.
        let mut fetched = calls.lock().unwrap().clone();
        fetched.sort();
        assert_eq!(fetched, vec!["AAPL".to_string(), "MSFT".to_string()]);
    }

    #[tokio::test]
    async fn failing_symbol_surfaces_row_error_without_aborting() {
        let lots = vec![
            lot("l1", "AAPL", 10, dec!(50), 1),
            lot("l2", "GONE", 4, dec!(25), 2),
        ];
        let (service, _) = service_with(lots, dec!(0), &[("AAPL", dec!(55))]);

        let summary = service.get_portfolio().await.unwrap();

        assert_eq!(summary.holdings.len(), 2);
        let failed = summary
            .holdings
            .iter()
            .find(|h| h.symbol == "GONE")
            .unwrap();
        assert!(failed.current_price.is_none());
        assert!(failed.price_error.is_some());

        // Invested covers every lot; market aggregates only priced rows.
        assert_eq!(summary.total_invested, dec!(600));
        assert_eq!(summary.total_market_value, dec!(550));
        assert_eq!(summary.total_unrealized_pl, dec!(50));
    }

    #[tokio::test]
    async fn reset_portfolio_reports_removed_lots() {
        let lots = vec![lot("l1", "AAPL", 10, dec!(50), 1)];
        let (service, _) = service_with(lots, dec!(0), &[]);

        assert_eq!(service.reset_portfolio().await.unwrap(), 1);
        let summary = service.get_portfolio().await.unwrap();
        assert!(summary.holdings.is_empty());
    }
}
