//! Session wiring: builds the pool, the writer, and all services.

use std::sync::Arc;

use log::info;

use crate::cash::{CashRepository, CashRepositoryTrait, CashService, CashServiceTrait};
use crate::constants::INITIAL_CASH_BALANCE;
use crate::db::{self, DbPool, WriteHandle};
use crate::lots::{LotRepository, LotRepositoryTrait};
use crate::market_data::{
    MarketDataProviderTrait, MarketDataService, MarketDataServiceTrait,
};
use crate::performance::{PerformanceService, PerformanceServiceTrait};
use crate::portfolio::{PortfolioService, PortfolioServiceTrait};
use crate::trades::{TradeRepository, TradeRepositoryTrait};
use crate::trading::{TradingService, TradingServiceTrait};
use crate::watchlist::{WatchlistRepository, WatchlistService, WatchlistServiceTrait};
use crate::Result;

/// One user session's services, sharing a pool and a single write actor.
///
/// Created per session and dropped on session end; dropping the context
/// stops the writer once in-flight jobs drain. There is no global
/// mutable state: callers hold the context and go through its services.
pub struct ServiceContext {
    db_path: String,
    pool: Arc<DbPool>,
    writer: WriteHandle,

    // Services
    pub trading_service: Arc<dyn TradingServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub cash_service: Arc<dyn CashServiceTrait>,
    pub watchlist_service: Arc<dyn WatchlistServiceTrait>,
    pub performance_service: Arc<dyn PerformanceServiceTrait>,
    pub market_data_service: Arc<dyn MarketDataServiceTrait>,
}

impl ServiceContext {
    /// Initializes the database under `data_dir` (or `DATABASE_URL`),
    /// runs migrations, creates the cash account on first use, and
    /// wires all services against the given market data provider.
    pub async fn new(
        data_dir: &str,
        provider: Arc<dyn MarketDataProviderTrait>,
    ) -> Result<Self> {
        let db_path = db::init(data_dir)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        let writer = db::spawn_writer((*pool).clone());

        let market_data_service: Arc<dyn MarketDataServiceTrait> =
            Arc::new(MarketDataService::new(provider));

        let lot_repository: Arc<dyn LotRepositoryTrait> =
            Arc::new(LotRepository::new(Arc::clone(&pool), writer.clone()));
        let trade_repository: Arc<dyn TradeRepositoryTrait> =
            Arc::new(TradeRepository::new(Arc::clone(&pool), writer.clone()));
        let cash_repository: Arc<dyn CashRepositoryTrait> =
            Arc::new(CashRepository::new(Arc::clone(&pool), writer.clone()));
        let watchlist_repository =
            Arc::new(WatchlistRepository::new(Arc::clone(&pool), writer.clone()));

        cash_repository.ensure_account(INITIAL_CASH_BALANCE).await?;

        let trading_service: Arc<dyn TradingServiceTrait> = Arc::new(TradingService::new(
            Arc::clone(&lot_repository),
            Arc::clone(&trade_repository),
            Arc::clone(&cash_repository),
            Arc::clone(&market_data_service),
            writer.clone(),
        ));
        let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
            Arc::clone(&lot_repository),
            Arc::clone(&trade_repository),
            Arc::clone(&cash_repository),
            Arc::clone(&market_data_service),
        ));
        let cash_service: Arc<dyn CashServiceTrait> =
            Arc::new(CashService::new(Arc::clone(&cash_repository)));
        let watchlist_service: Arc<dyn WatchlistServiceTrait> = Arc::new(WatchlistService::new(
            watchlist_repository,
            Arc::clone(&market_data_service),
        ));
        let performance_service: Arc<dyn PerformanceServiceTrait> =
            Arc::new(PerformanceService::new(Arc::clone(&market_data_service)));

        info!("Session context ready ({})", db_path);

        Ok(Self {
            db_path,
            pool,
            writer,
            trading_service,
            portfolio_service,
            cash_service,
            watchlist_service,
            performance_service,
            market_data_service,
        })
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    pub fn pool(&self) -> Arc<DbPool> {
        Arc::clone(&self.pool)
    }

    pub fn writer(&self) -> WriteHandle {
        self.writer.clone()
    }

    pub fn trading_service(&self) -> Arc<dyn TradingServiceTrait> {
        Arc::clone(&self.trading_service)
    }

    pub fn portfolio_service(&self) -> Arc<dyn PortfolioServiceTrait> {
        Arc::clone(&self.portfolio_service)
    }

    pub fn cash_service(&self) -> Arc<dyn CashServiceTrait> {
        Arc::clone(&self.cash_service)
    }

    pub fn watchlist_service(&self) -> Arc<dyn WatchlistServiceTrait> {
        Arc::clone(&self.watchlist_service)
    }

    pub fn performance_service(&self) -> Arc<dyn PerformanceServiceTrait> {
        Arc::clone(&self.performance_service)
    }

    pub fn market_data_service(&self) -> Arc<dyn MarketDataServiceTrait> {
        Arc::clone(&self.market_data_service)
    }
}
