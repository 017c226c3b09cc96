//! Capture rule: landing in an own empty pit captures the opposite pit.

use tracing::instrument;

use super::context::GameContext;
use super::engine::GameRule;

/// Captures the opposite pit when the last sown stone lands in an empty
/// pit of the mover's own row.
///
/// The trigger is evaluated strictly after distribution: the landing pit
/// must not be the mover's mancala, must lie in the mover's row, must hold
/// exactly one stone (it was empty before the sowing reached it), and the
/// pit directly opposite must be non-empty. Both pits are then emptied
/// into the mover's mancala. In every other case the context is returned
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct CaptureStonesRule;

impl GameRule for CaptureStonesRule {
    #[instrument(skip(self, ctx), fields(last_pit_idx = ?ctx.last_pit_idx()))]
    fn apply(&self, ctx: GameContext) -> GameContext {
        let Some(last_pit_idx) = ctx.last_pit_idx() else {
            return ctx;
        };

        if !capture_rule_met(&ctx, last_pit_idx) {
            return ctx;
        }

        let opposite_pit_idx = ctx.board().opposite_pit_index(last_pit_idx);
        let mancala_pit = ctx.player_mancala_pit();

        let board = ctx
            .board()
            .move_stones(opposite_pit_idx, mancala_pit)
            .move_stones(last_pit_idx, mancala_pit);

        ctx.with_board(board)
    }
}

/// The landing pit is checked before the opposite pit is derived: sowing
/// only ever lands in a regular pit or the mover's own mancala, and a
/// mancala has no opposite.
fn capture_rule_met(ctx: &GameContext, last_pit_idx: usize) -> bool {
    if last_pit_idx == ctx.player_mancala_pit()
        || !ctx.is_pit_owned_by_current_player(last_pit_idx)
    {
        return false;
    }

    let opposite_pit_idx = ctx.board().opposite_pit_index(last_pit_idx);

    ctx.board().stones(last_pit_idx) == 1 && ctx.board().stones(opposite_pit_idx) > 0
}
