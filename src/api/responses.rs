//! Response payloads for the games API.

use serde::{Deserialize, Serialize};

use crate::domain::{Board, Game, GameId};

/// API view of a game board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Stones in each pit, mancalas included.
    pub pits: Vec<u32>,
    /// Regular pits per row, excluding the mancala.
    pub pits_per_row: usize,
}

impl BoardResponse {
    /// Builds the response view of a board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            pits: board.pits().to_vec(),
            pits_per_row: board.pits_per_row(),
        }
    }
}

/// API view of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    /// Unique identifier of the game.
    pub id: GameId,
    /// Current board.
    pub board: BoardResponse,
    /// Number of players.
    pub total_players: usize,
    /// Player whose turn it is.
    pub current_player: usize,
    /// Lifecycle state (`IN_PROGRESS` or `GAME_OVER`).
    pub game_state: String,
    /// Winning player, absent while in progress or on a draw.
    pub winner: Option<usize>,
    /// Version for the next optimistic update.
    pub version: u32,
}

impl GameResponse {
    /// Builds the response view of a game.
    pub fn from_game(game: &Game) -> Self {
        Self {
            id: game.id(),
            board: BoardResponse::from_board(game.board()),
            total_players: game.total_players(),
            current_player: game.current_player(),
            game_state: game.game_state().to_string(),
            winner: game.winner(),
            version: game.version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameState;

    #[test]
    fn test_game_response_mirrors_the_game() {
        let game = Game::new(
            GameId::new_v4(),
            Board::new(2, 6, 4),
            2,
            1,
            GameState::GameOver,
            Some(1),
            3,
        );

        let response = GameResponse::from_game(&game);
        assert_eq!(response.id, game.id());
        assert_eq!(response.board.pits, game.board().pits());
        assert_eq!(response.board.pits_per_row, 6);
        assert_eq!(response.total_players, 2);
        assert_eq!(response.current_player, 1);
        assert_eq!(response.game_state, "GAME_OVER");
        assert_eq!(response.winner, Some(1));
        assert_eq!(response.version, 3);
    }
}
