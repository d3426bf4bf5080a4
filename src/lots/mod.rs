//! Lots module - open purchase records consumed by later sells.

mod lots_model;
mod lots_repository;
mod lots_traits;

pub use lots_model::{Lot, LotDB, NewLot};
pub use lots_repository::LotRepository;
pub use lots_traits::LotRepositoryTrait;
