//! Game aggregate and lifecycle state.

use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use super::board::Board;

/// Unique identifier of a game.
pub type GameId = Uuid;

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// The game accepts moves.
    InProgress,
    /// The game is finished; further moves are rejected by validation.
    GameOver,
}

impl GameState {
    /// Whether the game has ended.
    pub fn is_game_over(self) -> bool {
        matches!(self, GameState::GameOver)
    }
}

/// A game of Mancala.
///
/// The aggregate is an immutable value: it is created once at version 0 and
/// thereafter only replaced wholesale by the repository's optimistic update.
/// `winner` is `None` while the game is in progress and also encodes a draw
/// once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    board: Board,
    total_players: usize,
    current_player: usize,
    game_state: GameState,
    winner: Option<usize>,
    version: u32,
}

impl Game {
    /// Creates a game value.
    pub fn new(
        id: GameId,
        board: Board,
        total_players: usize,
        current_player: usize,
        game_state: GameState,
        winner: Option<usize>,
        version: u32,
    ) -> Self {
        Self {
            id,
            board,
            total_players,
            current_player,
            game_state,
            winner,
            version,
        }
    }

    /// Unique identifier of the game.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of players (equal to the number of board rows).
    pub fn total_players(&self) -> usize {
        self.total_players
    }

    /// Index of the player whose turn it is, in `[0, total_players)`.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Lifecycle state.
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// Winning player index, or `None` while in progress or on a draw.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Version counter used for the optimistic-concurrency predicate.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Index of the player after the current one in turn order.
    pub fn next_player(&self) -> usize {
        (self.current_player + 1) % self.total_players
    }

    /// Returns a copy with the given board.
    pub fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            ..self.clone()
        }
    }

    /// Returns a copy with the given current player.
    pub fn with_current_player(&self, current_player: usize) -> Self {
        Self {
            current_player,
            ..self.clone()
        }
    }

    /// Returns a copy with the given lifecycle state.
    pub fn with_game_state(&self, game_state: GameState) -> Self {
        Self {
            game_state,
            ..self.clone()
        }
    }

    /// Returns a copy with the given winner.
    pub fn with_winner(&self, winner: Option<usize>) -> Self {
        Self {
            winner,
            ..self.clone()
        }
    }

    /// Returns a copy with the given version.
    pub fn with_version(&self, version: u32) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }
}
