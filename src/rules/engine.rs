//! Rules engine: ordered validation followed by ordered rule application.

use tracing::{debug, instrument};

use super::capture::CaptureStonesRule;
use super::context::GameContext;
use super::distribute::DistributeStonesRule;
use super::game_over::DetermineGameOverRule;
use super::next_player::DetermineNextPlayerRule;
use super::validators::{
    EmptyPitValidator, GameOverValidator, PitBelongsToPlayerValidator, PitIsMancalaValidator,
    PitIsValidValidator, PlayerMoveValidator, ValidationError,
};

/// A single state-transition rule of the game.
///
/// Rules are total: given a context that passed validation, a rule never
/// fails. Each rule consumes the previous rule's output context and
/// returns a new one.
pub trait GameRule: Send + Sync {
    /// Applies the rule, returning the updated context.
    fn apply(&self, ctx: GameContext) -> GameContext;
}

/// Orchestrates validators and rules over a move context.
pub trait RulesEngine: Send + Sync {
    /// Runs every validator against the initial context (failing fast on
    /// the first violation, with no state change), then folds the rule
    /// sequence over the context.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by a validator.
    fn apply(&self, ctx: GameContext) -> Result<GameContext, ValidationError>;
}

/// The Mancala rules engine.
///
/// Validators and rules are plain values held in literal ordered lists.
/// The rule order is a hard contract: capture must see the board after
/// distribution, game-over detection must see the board after capture,
/// and next-player selection needs both the post-game-over state and the
/// landing pit recorded by distribution.
pub struct MancalaRulesEngine {
    validators: Vec<Box<dyn PlayerMoveValidator>>,
    rules: Vec<Box<dyn GameRule>>,
}

impl MancalaRulesEngine {
    /// Builds the engine with its fixed validator and rule orders. The
    /// bounds validator runs first so the later validators may index the
    /// board directly, and the game-over check precedes the pit checks so
    /// a finished game is reported as such rather than as an empty pit.
    pub fn new() -> Self {
        Self {
            validators: vec![
                Box::new(PitIsValidValidator),
                Box::new(GameOverValidator),
                Box::new(PitIsMancalaValidator),
                Box::new(EmptyPitValidator),
                Box::new(PitBelongsToPlayerValidator),
            ],
            rules: vec![
                Box::new(DistributeStonesRule),
                Box::new(CaptureStonesRule),
                Box::new(DetermineGameOverRule),
                Box::new(DetermineNextPlayerRule),
            ],
        }
    }
}

impl Default for MancalaRulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for MancalaRulesEngine {
    #[instrument(skip(self, ctx), fields(game_id = %ctx.game().id(), pit_idx = ctx.pit_idx()))]
    fn apply(&self, ctx: GameContext) -> Result<GameContext, ValidationError> {
        for validator in &self.validators {
            validator.validate(&ctx)?;
        }

        debug!("Move accepted, applying rules");
        Ok(self
            .rules
            .iter()
            .fold(ctx, |current, rule| rule.apply(current)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Game, GameId, GameState};

    fn game(board: Board) -> Game {
        let total_players = board.total_rows();
        Game::new(
            GameId::new_v4(),
            board,
            total_players,
            0,
            GameState::InProgress,
            None,
            0,
        )
    }

    #[test]
    fn test_rejected_move_leaves_context_untouched() {
        let engine = MancalaRulesEngine::new();
        let board = Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3);

        // selecting a mancala fails validation before any rule runs
        let err = engine
            .apply(GameContext::new(game(board), 3))
            .unwrap_err();
        assert!(matches!(err, ValidationError::PitIsMancala { pit_idx: 3 }));
    }

    #[test]
    fn test_validation_stops_at_first_failure() {
        let engine = MancalaRulesEngine::new();
        let board = Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3);

        // out-of-range index would also fail the mancala and ownership
        // checks; the bounds validator reports first
        let err = engine
            .apply(GameContext::new(game(board), 42))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPit { pit_idx: 42 }));
    }

    #[test]
    fn test_applies_rules_in_order() {
        let engine = MancalaRulesEngine::new();
        let board = Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3);

        let ctx = engine.apply(GameContext::new(game(board), 0)).unwrap();
        assert_eq!(ctx.board().pits(), &[0, 3, 3, 1, 2, 2, 2, 0]);
        // landed in own mancala: extra turn
        assert_eq!(ctx.player(), 0);
        assert_eq!(ctx.game_state(), GameState::InProgress);
    }
}
