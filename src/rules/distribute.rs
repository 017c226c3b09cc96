//! Stone distribution (sowing) rule.

use tracing::instrument;

use super::context::GameContext;
use super::engine::GameRule;

/// Sows the stones from the selected pit forward around the board.
///
/// Stones are placed one per pit, walking forward with wraparound. Every
/// mancala that does not belong to the current player is skipped, so the
/// mover's own mancala is a valid landing pit while opponents' mancalas
/// never receive a stone. The index of the last pit incremented is recorded
/// on the context; it drives both the capture and the next-player rules.
#[derive(Debug, Clone, Copy)]
pub struct DistributeStonesRule;

impl GameRule for DistributeStonesRule {
    #[instrument(skip(self, ctx), fields(pit_idx = ctx.pit_idx()))]
    fn apply(&self, ctx: GameContext) -> GameContext {
        let mut stones_to_distribute = ctx.board().stones(ctx.pit_idx());
        if stones_to_distribute == 0 {
            // validators reject empty pits; nothing to sow here
            return ctx;
        }

        let mancala_pit = ctx.player_mancala_pit();
        let total_pits = ctx.board().total_pits();

        let mut current_pit = ctx.pit_idx();
        let mut sown_pits = Vec::with_capacity(stones_to_distribute as usize);

        while stones_to_distribute > 0 {
            current_pit = (current_pit + 1) % total_pits;

            if ctx.board().is_mancala_pit(current_pit) && current_pit != mancala_pit {
                continue;
            }

            sown_pits.push(current_pit);
            stones_to_distribute -= 1;
        }

        let board = ctx
            .board()
            .empty_pit(ctx.pit_idx())
            .add_stone_to_pits(&sown_pits);

        ctx.with_board(board).with_last_pit_idx(current_pit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Game, GameId, GameState};

    fn context(board: Board, pit_idx: usize, player: usize) -> GameContext {
        let total_players = board.total_rows();
        let game = Game::new(
            GameId::new_v4(),
            board,
            total_players,
            player,
            GameState::InProgress,
            None,
            0,
        );
        GameContext::new(game, pit_idx)
    }

    #[test]
    fn test_sows_forward_and_records_landing_pit() {
        let board = Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3);
        let ctx = DistributeStonesRule.apply(context(board, 0, 0));

        assert_eq!(ctx.board().pits(), &[0, 3, 3, 1, 2, 2, 2, 0]);
        assert_eq!(ctx.last_pit_idx(), Some(3));
    }

    #[test]
    fn test_skips_opponent_mancala_on_wraparound() {
        // 5 stones from pit 6 wrap through the mover's mancala at 7 and
        // past the opponent's mancala at 3
        let board = Board::from_pits(vec![1, 1, 1, 0, 1, 1, 5, 0], 3);
        let ctx = DistributeStonesRule.apply(context(board, 6, 1));

        assert_eq!(ctx.board().pits(), &[2, 2, 2, 0, 2, 1, 0, 1]);
        assert_eq!(ctx.last_pit_idx(), Some(4));
        // the opponent's mancala never received a stone
        assert_eq!(ctx.board().stones(3), 0);
    }

    #[test]
    fn test_empty_source_pit_is_a_no_op() {
        let board = Board::from_pits(vec![0, 2, 2, 0, 2, 2, 2, 0], 3);
        let ctx = DistributeStonesRule.apply(context(board.clone(), 0, 0));

        assert_eq!(ctx.board(), &board);
        assert_eq!(ctx.last_pit_idx(), None);
    }

    #[test]
    fn test_long_sow_passes_own_mancala_twice() {
        // 9 stones from pit 2 of a tiny board: own mancala receives two
        // stones over two laps, opponent's mancala none
        let board = Board::from_pits(vec![0, 0, 9, 0, 0, 0, 0, 0], 3);
        let ctx = DistributeStonesRule.apply(context(board, 2, 0));

        assert_eq!(ctx.board().stones(3), 2);
        assert_eq!(ctx.board().stones(7), 0);
        assert_eq!(ctx.board().total_stones(), 9);
    }

    #[test]
    fn test_conserves_stones() {
        let board = Board::new(2, 6, 4);
        let total = board.total_stones();
        let ctx = DistributeStonesRule.apply(context(board, 2, 0));
        assert_eq!(ctx.board().total_stones(), total);
    }
}
