//! Core domain types: board geometry, the game aggregate, and the
//! persistence contract.

mod board;
mod error;
mod game;
mod memory;
mod repository;

pub use board::Board;
pub use error::RepositoryError;
pub use game::{Game, GameId, GameState};
pub use memory::InMemoryGamesRepository;
pub use repository::GamesRepository;
