//! In-memory games repository.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, instrument};

use super::error::RepositoryError;
use super::game::{Game, GameId};
use super::repository::GamesRepository;

/// Thread-safe in-memory [`GamesRepository`].
///
/// Backs the server's `--in-memory` mode and the test suites. The version
/// contract is identical to the database-backed implementation.
#[derive(Debug, Default)]
pub struct InMemoryGamesRepository {
    games: RwLock<HashMap<GameId, Game>>,
}

impl InMemoryGamesRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GamesRepository for InMemoryGamesRepository {
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    fn create(&self, game: Game) -> Result<GameId, RepositoryError> {
        let id = game.id();
        self.games.write().unwrap().insert(id, game);
        debug!(game_id = %id, "Game stored");
        Ok(id)
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: GameId) -> Result<Game, RepositoryError> {
        self.games
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound { id })
    }

    #[instrument(skip(self))]
    fn find_by_id_and_version(&self, id: GameId, version: u32) -> Result<Game, RepositoryError> {
        let game = self.find_by_id(id)?;
        if game.version() != version {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(game)
    }

    #[instrument(skip(self, game), fields(game_id = %game.id(), version = game.version()))]
    fn update(&self, game: Game) -> Result<Game, RepositoryError> {
        let mut games = self.games.write().unwrap();

        let existing = games
            .get(&game.id())
            .ok_or(RepositoryError::NotFound { id: game.id() })?;
        if existing.version() != game.version() {
            return Err(RepositoryError::VersionConflict);
        }

        let updated = game.with_version(game.version() + 1);
        games.insert(updated.id(), updated.clone());
        debug!(game_id = %updated.id(), version = updated.version(), "Game updated");
        Ok(updated)
    }
}
