use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;

use super::trading_errors::TradingError;
use super::trading_model::{plan_fifo_consumption, TradeExecution};
use super::trading_traits::TradingServiceTrait;
use crate::cash::CashRepositoryTrait;
use crate::db::WriteHandle;
use crate::lots::{LotRepositoryTrait, NewLot};
use crate::market_data::MarketDataServiceTrait;
use crate::trades::{NewTradeRecord, TradeRepositoryTrait, TradeSide};
use crate::utils::normalize_symbol;
use crate::Result;

/// Executes buy and sell requests against the ledger.
///
/// The price is fetched before the transaction opens, so a slow or hung
/// oracle never holds the store. Precondition checks (funds, held
/// shares) run inside the transaction against the authoritative rows;
/// all mutations of a single trade commit or roll back together on the
/// writer's connection.
pub struct TradingService {
    lot_repository: Arc<dyn LotRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    cash_repository: Arc<dyn CashRepositoryTrait>,
    market_data_service: Arc<dyn MarketDataServiceTrait>,
    writer: WriteHandle,
}

impl TradingService {
    pub fn new(
        lot_repository: Arc<dyn LotRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        cash_repository: Arc<dyn CashRepositoryTrait>,
        market_data_service: Arc<dyn MarketDataServiceTrait>,
        writer: WriteHandle,
    ) -> Self {
        Self {
            lot_repository,
            trade_repository,
            cash_repository,
            market_data_service,
            writer,
        }
    }

    fn validate_request(symbol: &str, quantity: i64) -> Result<String> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(TradingError::InvalidSymbol.into());
        }
        if quantity <= 0 {
            return Err(TradingError::InvalidQuantity(quantity).into());
        }
        Ok(symbol)
    }

    /// Fetches the current price for `symbol`. Any oracle failure maps
    /// to `PriceUnavailable` and aborts the operation before it touches
    /// the store.
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal> {
        let quote = self
            .market_data_service
            .get_latest_quote(symbol)
            .await
            .map_err(|e| TradingError::PriceUnavailable {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        if quote.close <= Decimal::ZERO {
            return Err(TradingError::PriceUnavailable {
                symbol: symbol.to_string(),
                reason: format!("provider returned non-positive price {}", quote.close),
            }
            .into());
        }

        Ok(quote.close)
    }
}

#[async_trait]
impl TradingServiceTrait for TradingService {
    async fn buy(&self, symbol: &str, quantity: i64) -> Result<TradeExecution> {
        let symbol = Self::validate_request(symbol, quantity)?;
        let price = self.fetch_price(&symbol).await?;
        let cost = price * Decimal::from(quantity);
        debug!("Buy {} x {} at {} (cost {})", quantity, symbol, price, cost);

        let lot_repository = Arc::clone(&self.lot_repository);
        let trade_repository = Arc::clone(&self.trade_repository);
        let cash_repository = Arc::clone(&self.cash_repository);
        let tx_symbol = symbol.clone();

        let execution = self
            .writer
            .exec(move |conn| {
                let account = cash_repository.get_in_tx(conn)?;
                if cost > account.balance {
                    return Err(TradingError::InsufficientFunds {
                        required: cost,
                        available: account.balance,
                    }
                    .into());
                }

                let trade_date = Utc::now();
                lot_repository.insert_in_tx(
                    conn,
                    NewLot {
                        symbol: tx_symbol.clone(),
                        quantity,
                        buy_price: price,
                        buy_date: trade_date,
                    },
                )?;
                let account = cash_repository.set_balance_in_tx(conn, account.balance - cost)?;
                let trade = trade_repository.append_in_tx(
                    conn,
                    NewTradeRecord {
                        symbol: tx_symbol,
                        quantity,
                        side: TradeSide::Buy,
                        price,
                        trade_date,
                    },
                )?;

                Ok(TradeExecution {
                    trade,
                    cash_balance: account.balance,
                })
            })
            .await?;

        info!(
            "Bought {} x {} at {}, balance {}",
            quantity, symbol, price, execution.cash_balance
        );
        Ok(execution)
    }

    async fn sell(&self, symbol: &str, quantity: i64) -> Result<TradeExecution> {
        let symbol = Self::validate_request(symbol, quantity)?;
        let price = self.fetch_price(&symbol).await?;
        let proceeds = price * Decimal::from(quantity);
        debug!(
            "Sell {} x {} at {} (proceeds {})",
            quantity, symbol, price, proceeds
        );

        let lot_repository = Arc::clone(&self.lot_repository);
        let trade_repository = Arc::clone(&self.trade_repository);
        let cash_repository = Arc::clone(&self.cash_repository);
        let tx_symbol = symbol.clone();

        let execution = self
            .writer
            .exec(move |conn| {
                let lots = lot_repository.get_lots_for_symbol_in_tx(conn, &tx_symbol)?;
                let held: i64 = lots.iter().map(|lot| lot.quantity).sum();
                if held < quantity {
                    return Err(TradingError::InsufficientShares {
                        symbol: tx_symbol,
                        requested: quantity,
                        held,
                    }
                    .into());
                }

                // Quantity accounting is per-lot FIFO; proceeds are
                // priced at the single transaction price.
                for step in plan_fifo_consumption(&lots, quantity) {
                    debug!("Consuming {} shares from lot {}", step.consumed, step.lot_id);
                    if step.remaining == 0 {
                        lot_repository.delete_in_tx(conn, &step.lot_id)?;
                    } else {
                        lot_repository.update_quantity_in_tx(conn, &step.lot_id, step.remaining)?;
                    }
                }

                let account = cash_repository.get_in_tx(conn)?;
                let account = cash_repository.set_balance_in_tx(conn, account.balance + proceeds)?;
                let trade = trade_repository.append_in_tx(
                    conn,
                    NewTradeRecord {
                        symbol: tx_symbol,
                        quantity,
                        side: TradeSide::Sell,
                        price,
                        trade_date: Utc::now(),
                    },
                )?;

                Ok(TradeExecution {
                    trade,
                    cash_balance: account.balance,
                })
            })
            .await?;

        info!(
            "Sold {} x {} at {}, balance {}",
            quantity, symbol, price, execution.cash_balance
        );
        Ok(execution)
    }
}
