//! Move-computation context threaded through validators and rules.

use crate::domain::{Board, Game, GameState};

/// Transient carrier for a single move: a game snapshot, the pit selected
/// by the current player, and the index where the last sown stone landed.
///
/// Each rule consumes a context and returns a new one; the wrapped game and
/// board are never mutated in place. `last_pit_idx` is `None` until the
/// distribute rule has run.
#[derive(Debug, Clone)]
pub struct GameContext {
    game: Game,
    pit_idx: usize,
    last_pit_idx: Option<usize>,
}

impl GameContext {
    /// Creates a context for a move on the given pit.
    pub fn new(game: Game, pit_idx: usize) -> Self {
        Self {
            game,
            pit_idx,
            last_pit_idx: None,
        }
    }

    /// The wrapped game snapshot.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the context, yielding the game it carries.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Pit selected by the current player.
    pub fn pit_idx(&self) -> usize {
        self.pit_idx
    }

    /// Index where the last sown stone landed, if sowing has happened.
    pub fn last_pit_idx(&self) -> Option<usize> {
        self.last_pit_idx
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// The current player.
    pub fn player(&self) -> usize {
        self.game.current_player()
    }

    /// The current lifecycle state.
    pub fn game_state(&self) -> GameState {
        self.game.game_state()
    }

    /// Index of the current player's mancala pit.
    pub fn player_mancala_pit(&self) -> usize {
        self.board().row_mancala_pit(self.player())
    }

    /// Whether the given pit lies in the current player's row.
    pub fn is_pit_owned_by_current_player(&self, pit_idx: usize) -> bool {
        self.board().is_pit_in_row(self.player(), pit_idx)
    }

    /// Returns a copy carrying the given board.
    pub fn with_board(&self, board: Board) -> Self {
        Self {
            game: self.game.with_board(board),
            pit_idx: self.pit_idx,
            last_pit_idx: self.last_pit_idx,
        }
    }

    /// Returns a copy with the given current player.
    pub fn with_player(&self, player: usize) -> Self {
        Self {
            game: self.game.with_current_player(player),
            pit_idx: self.pit_idx,
            last_pit_idx: self.last_pit_idx,
        }
    }

    /// Returns a copy with the given winner.
    pub fn with_winner(&self, winner: Option<usize>) -> Self {
        Self {
            game: self.game.with_winner(winner),
            pit_idx: self.pit_idx,
            last_pit_idx: self.last_pit_idx,
        }
    }

    /// Returns a copy with the given lifecycle state.
    pub fn with_game_state(&self, game_state: GameState) -> Self {
        Self {
            game: self.game.with_game_state(game_state),
            pit_idx: self.pit_idx,
            last_pit_idx: self.last_pit_idx,
        }
    }

    /// Returns a copy recording where the last sown stone landed.
    pub fn with_last_pit_idx(&self, last_pit_idx: usize) -> Self {
        Self {
            game: self.game.clone(),
            pit_idx: self.pit_idx,
            last_pit_idx: Some(last_pit_idx),
        }
    }
}
