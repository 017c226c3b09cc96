//! End-to-end tests for the move-rules engine.

use mancala_server::{
    Board, Game, GameContext, GameId, GameState, MancalaRulesEngine, RulesEngine, ValidationError,
};

fn game_with(board: Board, current_player: usize) -> Game {
    let total_players = board.total_rows();
    Game::new(
        GameId::new_v4(),
        board,
        total_players,
        current_player,
        GameState::InProgress,
        None,
        0,
    )
}

#[test]
fn test_canonical_opening_move_earns_an_extra_turn() {
    // 2 players, 3 pits per player, 2 stones per pit
    let engine = MancalaRulesEngine::new();
    let board = Board::from_pits(vec![2, 2, 2, 0, 2, 2, 2, 0], 3);

    let ctx = engine
        .apply(GameContext::new(game_with(board, 0), 0))
        .unwrap();

    assert_eq!(ctx.board().pits(), &[0, 3, 3, 1, 2, 2, 2, 0]);
    assert_eq!(ctx.last_pit_idx(), Some(3));
    assert_eq!(ctx.player(), 0);
    assert_eq!(ctx.game_state(), GameState::InProgress);
}

#[test]
fn test_move_landing_in_own_empty_pit_captures_the_opposite_pit() {
    // player 0 sows pit 0's single stone into empty pit 1; pit 11 opposite
    // holds 4 stones, all of which land in player 0's mancala
    let engine = MancalaRulesEngine::new();
    let board = Board::from_pits(vec![1, 0, 2, 1, 1, 1, 3, 4, 1, 4, 2, 4, 1, 5], 6);
    let total = board.total_stones();

    let ctx = engine
        .apply(GameContext::new(game_with(board, 0), 0))
        .unwrap();

    assert_eq!(ctx.board().stones(0), 0);
    assert_eq!(ctx.board().stones(1), 0);
    assert_eq!(ctx.board().stones(11), 0);
    assert_eq!(ctx.board().stones(6), 3 + 4 + 1);
    assert_eq!(ctx.board().total_stones(), total);
    // turn passes after a capture
    assert_eq!(ctx.player(), 1);
}

#[test]
fn test_final_move_collects_the_board_and_names_a_winner() {
    // player 0's last stone leaves their row empty; the sweep gives
    // player 1 the higher mancala
    let engine = MancalaRulesEngine::new();
    let board = Board::from_pits(vec![0, 0, 1, 4, 3, 3, 0, 5], 3);

    let ctx = engine
        .apply(GameContext::new(game_with(board, 0), 2))
        .unwrap();

    assert_eq!(ctx.game_state(), GameState::GameOver);
    assert_eq!(ctx.board().pits(), &[0, 0, 0, 5, 0, 0, 0, 11]);
    assert_eq!(ctx.game().winner(), Some(1));
}

#[test]
fn test_rules_pipeline_conserves_stones() {
    let engine = MancalaRulesEngine::new();
    let board = Board::new(2, 6, 4);
    let total = board.total_stones();

    let mut game = game_with(board, 0);
    // walk a few moves, always picking the first legal pit
    for _ in 0..5 {
        if game.game_state().is_game_over() {
            break;
        }
        let player = game.current_player();
        let pit = (0..game.board().total_pits())
            .find(|&idx| {
                game.board().is_pit_in_row(player, idx)
                    && !game.board().is_mancala_pit(idx)
                    && game.board().stones(idx) > 0
            })
            .expect("a legal pit should exist while the game is in progress");

        let ctx = engine.apply(GameContext::new(game.clone(), pit)).unwrap();
        game = ctx.into_game();
        assert_eq!(game.board().total_stones(), total);
    }
}

#[test]
fn test_rejections_report_the_specific_validator() {
    let engine = MancalaRulesEngine::new();
    let board = Board::from_pits(vec![2, 0, 2, 0, 2, 2, 2, 0], 3);

    let out_of_range = engine.apply(GameContext::new(game_with(board.clone(), 0), 99));
    assert!(matches!(
        out_of_range.unwrap_err(),
        ValidationError::InvalidPit { pit_idx: 99 }
    ));

    let mancala = engine.apply(GameContext::new(game_with(board.clone(), 0), 7));
    assert!(matches!(
        mancala.unwrap_err(),
        ValidationError::PitIsMancala { pit_idx: 7 }
    ));

    let empty = engine.apply(GameContext::new(game_with(board.clone(), 0), 1));
    assert!(matches!(
        empty.unwrap_err(),
        ValidationError::PitHasNoStones { pit_idx: 1 }
    ));

    let foreign = engine.apply(GameContext::new(game_with(board.clone(), 0), 4));
    assert!(matches!(
        foreign.unwrap_err(),
        ValidationError::PitNotOwnedByPlayer {
            pit_idx: 4,
            player: 0
        }
    ));

    let finished = game_with(board, 0).with_game_state(GameState::GameOver);
    let over = engine.apply(GameContext::new(finished, 0));
    assert!(matches!(
        over.unwrap_err(),
        ValidationError::GameAlreadyOver { .. }
    ));
}

#[test]
fn test_three_player_game_keeps_running_while_two_rows_hold_stones() {
    // player 0 empties their row, but players 1 and 2 still hold stones
    let engine = MancalaRulesEngine::new();
    let board = Board::from_pits(vec![0, 1, 0, 2, 1, 0, 1, 2, 0], 2);

    let ctx = engine
        .apply(GameContext::new(game_with(board, 0), 1))
        .unwrap();

    assert_eq!(ctx.game_state(), GameState::InProgress);
    assert_eq!(ctx.player(), 1);
}
