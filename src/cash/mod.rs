//! Cash account module - the session's simulated cash balance.

mod cash_model;
mod cash_repository;
mod cash_service;
mod cash_traits;

pub use cash_model::CashAccount;
pub use cash_repository::CashRepository;
pub use cash_service::CashService;
pub use cash_traits::{CashRepositoryTrait, CashServiceTrait};
