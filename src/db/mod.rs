//! Database persistence layer for game aggregates.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{GameRecord, NewGameRecord};
pub use repository::SqliteGamesRepository;
