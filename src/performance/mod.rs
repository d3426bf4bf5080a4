//! Performance module - return statistics over a historical price series.

mod performance_model;
mod performance_service;
mod performance_traits;

#[cfg(test)]
mod performance_model_tests;

pub use performance_model::{calculate_performance, PricePerformance};
pub use performance_service::PerformanceService;
pub use performance_traits::PerformanceServiceTrait;
