//! Move execution use case.

use std::sync::Arc;

use derive_more::{Display, Error, From};
use derive_new::new;
use tracing::{info, instrument};

use crate::domain::{Game, GameId, GamesRepository, RepositoryError};
use crate::rules::{GameContext, RulesEngine, ValidationError};

/// A player's request to play one move.
#[derive(Debug, Clone, Copy, new)]
pub struct PlayCommand {
    game_id: GameId,
    pit_idx: usize,
    version: u32,
}

/// Failure of the play use case.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// The move was rejected by a validator; nothing was written.
    #[display("{_0}")]
    Validation(ValidationError),
    /// The game could not be read at the requested version, or the
    /// optimistic write lost a race.
    #[display("{_0}")]
    Repository(RepositoryError),
}

/// Executes one move: resolve the game at the requested version, run the
/// rules engine, and write the result back with a compare-and-swap.
///
/// Version conflicts are surfaced to the caller; this use case never
/// retries them.
#[derive(Clone, new)]
pub struct PlayUseCase {
    games: Arc<dyn GamesRepository>,
    engine: Arc<dyn RulesEngine>,
}

impl PlayUseCase {
    /// Plays a move and returns the persisted game at its new version.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the game cannot be resolved at the
    /// requested version, the move fails validation, or the write loses
    /// the version race.
    #[instrument(skip(self, cmd), fields(game_id = %cmd.game_id, pit_idx = cmd.pit_idx, version = cmd.version))]
    pub fn play(&self, cmd: PlayCommand) -> Result<Game, PlayError> {
        let game = self
            .games
            .find_by_id_and_version(cmd.game_id, cmd.version)?;

        let ctx = self.engine.apply(GameContext::new(game, cmd.pit_idx))?;

        let updated = self.games.update(ctx.into_game())?;
        info!(game_id = %updated.id(), version = updated.version(), "Move applied");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, GameState, InMemoryGamesRepository};
    use crate::rules::MancalaRulesEngine;

    fn stored_game(repo: &InMemoryGamesRepository) -> Game {
        let game = Game::new(
            GameId::new_v4(),
            Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3),
            2,
            0,
            GameState::InProgress,
            None,
            0,
        );
        repo.create(game.clone()).unwrap();
        game
    }

    fn use_case(repo: Arc<InMemoryGamesRepository>) -> PlayUseCase {
        PlayUseCase::new(repo, Arc::new(MancalaRulesEngine::new()))
    }

    #[test]
    fn test_play_persists_the_transformed_game() {
        let repo = Arc::new(InMemoryGamesRepository::new());
        let game = stored_game(&repo);
        let use_case = use_case(repo.clone());

        let updated = use_case
            .play(PlayCommand::new(game.id(), 0, 0))
            .unwrap();

        assert_eq!(updated.board().pits(), &[0, 3, 3, 1, 2, 2, 2, 0]);
        assert_eq!(updated.version(), 1);
        assert_eq!(repo.find_by_id(game.id()).unwrap(), updated);
    }

    #[test]
    fn test_stale_version_reads_as_not_found() {
        let repo = Arc::new(InMemoryGamesRepository::new());
        let game = stored_game(&repo);
        let use_case = use_case(repo);

        let err = use_case
            .play(PlayCommand::new(game.id(), 0, 7))
            .unwrap_err();
        assert!(matches!(
            err,
            PlayError::Repository(RepositoryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_rejected_move_writes_nothing() {
        let repo = Arc::new(InMemoryGamesRepository::new());
        let game = stored_game(&repo);
        let use_case = use_case(repo.clone());

        // pit 3 is the mover's mancala
        let err = use_case
            .play(PlayCommand::new(game.id(), 3, 0))
            .unwrap_err();
        assert!(matches!(err, PlayError::Validation(_)));
        assert_eq!(repo.find_by_id(game.id()).unwrap(), game);
    }
}
