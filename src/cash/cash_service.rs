use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use rust_decimal::Decimal;

use super::cash_model::CashAccount;
use super::cash_traits::{CashRepositoryTrait, CashServiceTrait};
use crate::constants::INITIAL_CASH_BALANCE;
use crate::Result;

/// Service for reading and administratively resetting the cash balance.
pub struct CashService {
    repository: Arc<dyn CashRepositoryTrait>,
    initial_balance: Decimal,
}

impl CashService {
    pub fn new(repository: Arc<dyn CashRepositoryTrait>) -> Self {
        Self::with_initial_balance(repository, INITIAL_CASH_BALANCE)
    }

    pub fn with_initial_balance(
        repository: Arc<dyn CashRepositoryTrait>,
        initial_balance: Decimal,
    ) -> Self {
        Self {
            repository,
            initial_balance,
        }
    }
}

#[async_trait]
impl CashServiceTrait for CashService {
    fn get_account(&self) -> Result<CashAccount> {
        self.repository.get_account()
    }

    fn get_balance(&self) -> Result<Decimal> {
        Ok(self.repository.get_account()?.balance)
    }

    async fn reset_balance(&self) -> Result<CashAccount> {
        info!("Resetting cash balance to {}", self.initial_balance);
        self.repository.reset(self.initial_balance).await
    }
}
