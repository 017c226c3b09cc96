//! Pre-move validators.
//!
//! Each validator checks one independent precondition against the move
//! context. The engine runs them in a fixed order and stops at the first
//! failure, before any rule has touched the game state. The bounds check
//! runs first so the remaining validators may index the board directly.

use derive_more::{Display, Error};

use crate::domain::GameId;

use super::context::GameContext;

/// A move rejected before any rule ran.
#[derive(Debug, Clone, Display, Error)]
pub enum ValidationError {
    /// The pit index lies outside the board.
    #[display("invalid pit [{pit_idx}]")]
    InvalidPit {
        /// The rejected pit index.
        pit_idx: usize,
    },
    /// The selected pit is a mancala.
    #[display("pit [{pit_idx}] is a mancala")]
    PitIsMancala {
        /// The rejected pit index.
        pit_idx: usize,
    },
    /// The selected pit holds no stones.
    #[display("pit [{pit_idx}] has no stones")]
    PitHasNoStones {
        /// The rejected pit index.
        pit_idx: usize,
    },
    /// The selected pit is not in the current player's row.
    #[display("pit [{pit_idx}] does not belong to player [{player}]")]
    PitNotOwnedByPlayer {
        /// The rejected pit index.
        pit_idx: usize,
        /// The player who attempted the move.
        player: usize,
    },
    /// The game has already ended.
    #[display("game [{game_id}] is over")]
    GameAlreadyOver {
        /// The finished game.
        game_id: GameId,
    },
}

/// Precondition checked against the move context before any rule runs.
pub trait PlayerMoveValidator: Send + Sync {
    /// Returns `Ok(())` when the precondition holds.
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError>;
}

/// Rejects pit indices outside `[0, total_pits)`.
#[derive(Debug, Clone, Copy)]
pub struct PitIsValidValidator;

impl PlayerMoveValidator for PitIsValidValidator {
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError> {
        if ctx.pit_idx() >= ctx.board().total_pits() {
            return Err(ValidationError::InvalidPit {
                pit_idx: ctx.pit_idx(),
            });
        }
        Ok(())
    }
}

/// Rejects moves that select a mancala pit.
#[derive(Debug, Clone, Copy)]
pub struct PitIsMancalaValidator;

impl PlayerMoveValidator for PitIsMancalaValidator {
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError> {
        if ctx.board().is_mancala_pit(ctx.pit_idx()) {
            return Err(ValidationError::PitIsMancala {
                pit_idx: ctx.pit_idx(),
            });
        }
        Ok(())
    }
}

/// Rejects moves that select an empty pit.
#[derive(Debug, Clone, Copy)]
pub struct EmptyPitValidator;

impl PlayerMoveValidator for EmptyPitValidator {
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError> {
        if ctx.board().stones(ctx.pit_idx()) == 0 {
            return Err(ValidationError::PitHasNoStones {
                pit_idx: ctx.pit_idx(),
            });
        }
        Ok(())
    }
}

/// Rejects moves on pits outside the current player's row.
#[derive(Debug, Clone, Copy)]
pub struct PitBelongsToPlayerValidator;

impl PlayerMoveValidator for PitBelongsToPlayerValidator {
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError> {
        if !ctx.is_pit_owned_by_current_player(ctx.pit_idx()) {
            return Err(ValidationError::PitNotOwnedByPlayer {
                pit_idx: ctx.pit_idx(),
                player: ctx.player(),
            });
        }
        Ok(())
    }
}

/// Rejects any move once the game is over.
#[derive(Debug, Clone, Copy)]
pub struct GameOverValidator;

impl PlayerMoveValidator for GameOverValidator {
    fn validate(&self, ctx: &GameContext) -> Result<(), ValidationError> {
        if ctx.game_state().is_game_over() {
            return Err(ValidationError::GameAlreadyOver {
                game_id: ctx.game().id(),
            });
        }
        Ok(())
    }
}
