//! Game lookup use case.

use std::sync::Arc;

use derive_new::new;
use tracing::instrument;

use crate::domain::{Game, GameId, GamesRepository, RepositoryError};

/// Retrieves games by their identifier.
#[derive(Clone, new)]
pub struct FindGameByIdUseCase {
    games: Arc<dyn GamesRepository>,
}

impl FindGameByIdUseCase {
    /// Looks up a game.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no game has the identifier.
    #[instrument(skip(self))]
    pub fn find_game(&self, game_id: GameId) -> Result<Game, RepositoryError> {
        self.games.find_by_id(game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, GameState, InMemoryGamesRepository};

    #[test]
    fn test_finds_stored_game() {
        let repo = Arc::new(InMemoryGamesRepository::new());
        let game = Game::new(
            GameId::new_v4(),
            Board::new(2, 6, 4),
            2,
            0,
            GameState::InProgress,
            None,
            0,
        );
        repo.create(game.clone()).unwrap();

        let use_case = FindGameByIdUseCase::new(repo);
        assert_eq!(use_case.find_game(game.id()).unwrap(), game);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let use_case = FindGameByIdUseCase::new(Arc::new(InMemoryGamesRepository::new()));
        let err = use_case.find_game(GameId::new_v4()).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
