//! End-of-game detection, final collection, and winner determination.

use tracing::instrument;

use crate::domain::{Board, GameState};

use super::context::GameContext;
use super::engine::GameRule;

/// Detects the terminal state and finalizes the board.
///
/// The game ends when at most one row still holds stones. On trigger,
/// every row's remaining stones are swept into that row's mancala, the
/// game state moves to `GameOver`, and the winner is the player with the
/// strictly highest mancala total (`None` on a tie). Re-applying the rule
/// to a finished, collected board changes nothing.
#[derive(Debug, Clone, Copy)]
pub struct DetermineGameOverRule;

impl GameRule for DetermineGameOverRule {
    #[instrument(skip(self, ctx))]
    fn apply(&self, ctx: GameContext) -> GameContext {
        if !is_game_over(&ctx) {
            return ctx;
        }

        let board = ctx.board().collect_all_stones();
        let winner = determine_winner(&board);

        ctx.with_board(board)
            .with_game_state(GameState::GameOver)
            .with_winner(winner)
    }
}

fn is_game_over(ctx: &GameContext) -> bool {
    let rows_with_stones = (0..ctx.game().total_players())
        .filter(|&row| ctx.board().row_has_stones(row))
        .count();

    rows_with_stones <= 1
}

fn determine_winner(board: &Board) -> Option<usize> {
    let scores: Vec<u32> = (0..board.total_rows())
        .map(|row| board.stones(board.row_mancala_pit(row)))
        .collect();

    let best = scores.iter().copied().max()?;
    let mut winners = scores.iter().enumerate().filter(|&(_, &score)| score == best);

    let (winner, _) = winners.next()?;
    match winners.next() {
        Some(_) => None, // tied maximum is a draw
        None => Some(winner),
    }
}
