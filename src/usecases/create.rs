//! Game creation use case.

use std::sync::Arc;

use derive_more::{Display, Error, From};
use derive_new::new;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{Board, Game, GameState, GamesRepository, RepositoryError};

/// Accepted range of player counts.
const TOTAL_PLAYERS: std::ops::RangeInclusive<usize> = 2..=5;
/// Accepted range of regular pits per player.
const PITS_PER_ROW: std::ops::RangeInclusive<usize> = 2..=14;
/// Accepted range of starting stones per pit.
const STONES_PER_PIT: std::ops::RangeInclusive<u32> = 2..=19;

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CreateNewGameCommand {
    total_players: usize,
    pits_per_row: usize,
    stones_per_pit: u32,
}

impl CreateNewGameCommand {
    /// Checks the settings against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSettings`] naming the offending setting.
    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if !TOTAL_PLAYERS.contains(&self.total_players) {
            return Err(InvalidSettings::new(format!(
                "total players [{}] must be between {} and {}",
                self.total_players,
                TOTAL_PLAYERS.start(),
                TOTAL_PLAYERS.end()
            )));
        }
        if !PITS_PER_ROW.contains(&self.pits_per_row) {
            return Err(InvalidSettings::new(format!(
                "pits per row [{}] must be between {} and {}",
                self.pits_per_row,
                PITS_PER_ROW.start(),
                PITS_PER_ROW.end()
            )));
        }
        if !STONES_PER_PIT.contains(&self.stones_per_pit) {
            return Err(InvalidSettings::new(format!(
                "stones per pit [{}] must be between {} and {}",
                self.stones_per_pit,
                STONES_PER_PIT.start(),
                STONES_PER_PIT.end()
            )));
        }
        Ok(())
    }
}

impl Default for CreateNewGameCommand {
    /// Classic two-player setup: six pits per row, six stones per pit.
    fn default() -> Self {
        Self::new(2, 6, 6)
    }
}

/// A game-creation setting outside its allowed range.
#[derive(Debug, Clone, Display, Error, new)]
#[display("invalid game settings: {message}")]
pub struct InvalidSettings {
    /// Which setting was rejected and why.
    pub message: String,
}

/// Failure of the game creation use case.
#[derive(Debug, Display, Error, From)]
pub enum CreateGameError {
    /// The requested settings are outside their allowed ranges.
    #[display("{_0}")]
    Settings(InvalidSettings),
    /// Persisting the new game failed.
    #[display("{_0}")]
    Repository(RepositoryError),
}

/// Creates and persists new games.
#[derive(Clone, new)]
pub struct CreateNewGameUseCase {
    games: Arc<dyn GamesRepository>,
}

impl CreateNewGameUseCase {
    /// Builds the initial game for the given settings and persists it.
    ///
    /// The new game starts at version 0 with player 0 to move, every
    /// regular pit seeded and every mancala empty.
    ///
    /// # Errors
    ///
    /// Returns [`CreateGameError`] if the settings are invalid or the
    /// repository rejects the write.
    #[instrument(skip(self))]
    pub fn create_new_game(&self, cmd: CreateNewGameCommand) -> Result<Game, CreateGameError> {
        cmd.validate()?;

        let board = Board::new(cmd.total_players, cmd.pits_per_row, cmd.stones_per_pit);
        let game = Game::new(
            Uuid::new_v4(),
            board,
            cmd.total_players,
            0,
            GameState::InProgress,
            None,
            0,
        );

        self.games.create(game.clone())?;
        info!(game_id = %game.id(), total_players = cmd.total_players, "New game created");
        Ok(game)
    }
}
