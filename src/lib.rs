//! Mancala game server library.
//!
//! # Architecture
//!
//! - **Domain**: immutable board geometry, the game aggregate, and the
//!   optimistic-concurrency repository contract
//! - **Rules**: the move-rules engine — ordered validators followed by the
//!   distribute / capture / game-over / next-player rule pipeline
//! - **Use cases**: create, find, and play operations coordinating the
//!   repository and the engine
//! - **Db**: SQLite-backed repository storing each game as a JSON document
//!   with a version column for compare-and-swap updates
//! - **Api**: axum REST surface over the use cases
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mancala_server::{
//!     CreateNewGameCommand, CreateNewGameUseCase, InMemoryGamesRepository,
//!     MancalaRulesEngine, PlayCommand, PlayUseCase,
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let games = Arc::new(InMemoryGamesRepository::new());
//! let create = CreateNewGameUseCase::new(games.clone());
//! let play = PlayUseCase::new(games, Arc::new(MancalaRulesEngine::new()));
//!
//! let game = create.create_new_game(CreateNewGameCommand::default())?;
//! let game = play.play(PlayCommand::new(game.id(), 0, game.version()))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod db;
mod domain;
mod rules;
mod usecases;

// Crate-level exports - API surface
pub use api::{
    ApiError, AppState, BoardResponse, CreateNewGameRequest, ErrorResponse, GameResponse,
    PlayRequest, games_router,
};

// Crate-level exports - Database repository
pub use db::{DbError, SqliteGamesRepository};

// Crate-level exports - Domain types
pub use domain::{
    Board, Game, GameId, GameState, GamesRepository, InMemoryGamesRepository, RepositoryError,
};

// Crate-level exports - Rules engine
pub use rules::{
    CaptureStonesRule, DetermineGameOverRule, DetermineNextPlayerRule, DistributeStonesRule,
    EmptyPitValidator, GameContext, GameOverValidator, GameRule, MancalaRulesEngine,
    PitBelongsToPlayerValidator, PitIsMancalaValidator, PitIsValidValidator, PlayerMoveValidator,
    RulesEngine, ValidationError,
};

// Crate-level exports - Use cases
pub use usecases::{
    CreateGameError, CreateNewGameCommand, CreateNewGameUseCase, FindGameByIdUseCase,
    InvalidSettings, PlayCommand, PlayError, PlayUseCase,
};
