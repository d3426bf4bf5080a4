//! Portfolio module - read-only valuation and history views.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

#[cfg(test)]
mod portfolio_service_tests;

pub use portfolio_model::{Holding, PortfolioSummary};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
