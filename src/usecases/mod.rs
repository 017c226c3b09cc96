//! Use cases coordinating the repository and the rules engine.

mod create;
mod find;
mod play;

pub use create::{CreateGameError, CreateNewGameCommand, CreateNewGameUseCase, InvalidSettings};
pub use find::FindGameByIdUseCase;
pub use play::{PlayCommand, PlayError, PlayUseCase};
