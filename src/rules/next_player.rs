//! Next-player selection rule.

use tracing::instrument;

use super::context::GameContext;
use super::engine::GameRule;

/// Picks the player to move next; does nothing if the game just ended.
///
/// Landing the last stone in one's own mancala earns an extra turn, as
/// long as the mover still has stones in their row. Otherwise the turn
/// passes to the next player in strict turn order who holds at least one
/// stone, falling back to the first player if nobody does (the game-over
/// rule normally catches that case first).
#[derive(Debug, Clone, Copy)]
pub struct DetermineNextPlayerRule;

impl GameRule for DetermineNextPlayerRule {
    #[instrument(skip(self, ctx), fields(player = ctx.player(), last_pit_idx = ?ctx.last_pit_idx()))]
    fn apply(&self, ctx: GameContext) -> GameContext {
        if ctx.game_state().is_game_over() {
            return ctx;
        }

        let player = ctx.player();
        let plays_again = ctx.last_pit_idx() == Some(ctx.player_mancala_pit())
            && ctx.board().row_has_stones(player);

        let next_player = if plays_again {
            player
        } else {
            next_playable_player(&ctx)
        };

        ctx.with_player(next_player)
    }
}

fn next_playable_player(ctx: &GameContext) -> usize {
    let total_players = ctx.game().total_players();
    let current = ctx.player();

    (1..total_players)
        .map(|offset| (current + offset) % total_players)
        .find(|&candidate| ctx.board().row_has_stones(candidate))
        .unwrap_or(0)
}
