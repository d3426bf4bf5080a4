use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{info, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::portfolio_model::{Holding, PortfolioSummary};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::cash::CashRepositoryTrait;
use crate::lots::LotRepositoryTrait;
use crate::market_data::MarketDataServiceTrait;
use crate::trades::{TradeRecord, TradeRepositoryTrait};
use crate::Result;

/// Read-only valuation over the ledger. Never mutates lots, trades, or
/// cash except through the explicitly administrative reset operations.
pub struct PortfolioService {
    lot_repository: Arc<dyn LotRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    cash_repository: Arc<dyn CashRepositoryTrait>,
    market_data_service: Arc<dyn MarketDataServiceTrait>,
}

impl PortfolioService {
    pub fn new(
        lot_repository: Arc<dyn LotRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        cash_repository: Arc<dyn CashRepositoryTrait>,
        market_data_service: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            lot_repository,
            trade_repository,
            cash_repository,
            market_data_service,
        }
    }

    /// Fetches the latest price once per distinct symbol; lots of the
    /// same symbol share the result.
    async fn fetch_prices(
        &self,
        symbols: Vec<String>,
    ) -> HashMap<String, std::result::Result<Decimal, String>> {
        let fetches = symbols.into_iter().map(|symbol| {
            let market_data_service = Arc::clone(&self.market_data_service);
            async move {
                let result = market_data_service
                    .get_latest_quote(&symbol)
                    .await
                    .map(|quote| quote.close)
                    .map_err(|e| e.to_string());
                (symbol, result)
            }
        });

        join_all(fetches).await.into_iter().collect()
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self) -> Result<PortfolioSummary> {
        let lots = self.lot_repository.get_lots()?;
        let cash_balance = self.cash_repository.get_account()?.balance;

        let mut symbols: Vec<String> = Vec::new();
        for lot in &lots {
            if !symbols.contains(&lot.symbol) {
                symbols.push(lot.symbol.clone());
            }
        }
        let prices = self.fetch_prices(symbols).await;

        let mut holdings = Vec::with_capacity(lots.len());
        let mut total_invested = Decimal::zero();
        let mut total_market_value = Decimal::zero();
        let mut total_unrealized_pl = Decimal::zero();

        for lot in &lots {
            let holding = match prices.get(&lot.symbol) {
                Some(Ok(price)) => Holding::priced(lot, *price),
                Some(Err(error)) => {
                    warn!("No price for {} in portfolio view: {}", lot.symbol, error);
                    Holding::unpriced(lot, error.clone())
                }
                None => Holding::unpriced(lot, "price not fetched".to_string()),
            };

            total_invested += holding.cost_basis;
            if let (Some(market_value), Some(unrealized_pl)) =
                (holding.market_value, holding.unrealized_pl)
            {
                total_market_value += market_value;
                total_unrealized_pl += unrealized_pl;
            }
            holdings.push(holding);
        }

        Ok(PortfolioSummary {
            holdings,
            total_invested,
            total_market_value,
            total_unrealized_pl,
            cash_balance,
        })
    }

    fn get_trade_history(&self) -> Result<Vec<TradeRecord>> {
        self.trade_repository.get_trades()
    }

    async fn reset_portfolio(&self) -> Result<usize> {
        let removed = self.lot_repository.delete_all().await?;
        info!("Reset portfolio: removed {} open lots", removed);
        Ok(removed)
    }

    async fn reset_trade_history(&self) -> Result<usize> {
        let removed = self.trade_repository.delete_all().await?;
        info!("Reset trade history: removed {} records", removed);
        Ok(removed)
    }
}
