//! Request payloads for the games API.

use serde::{Deserialize, Serialize};

use crate::domain::GameId;
use crate::usecases::{CreateNewGameCommand, PlayCommand};

/// Body of `POST /api/v1/games`.
///
/// The endpoint also accepts an empty body, in which case the default
/// game settings apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewGameRequest {
    /// Number of players (2 to 5).
    pub total_players: usize,
    /// Regular pits per player, excluding the mancala.
    pub pits_per_row: usize,
    /// Starting stones in each regular pit.
    pub stones_per_pit: u32,
}

impl CreateNewGameRequest {
    /// Converts the request into a creation command.
    pub fn to_command(&self) -> CreateNewGameCommand {
        CreateNewGameCommand::new(self.total_players, self.pits_per_row, self.stones_per_pit)
    }
}

/// Body of `PUT /api/v1/games/{game_id}/play`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Pit the current player sows from.
    pub pit_idx: usize,
    /// Version of the game the player saw when choosing the move.
    pub version: u32,
}

impl PlayRequest {
    /// Converts the request into a play command for the given game.
    pub fn to_command(&self, game_id: GameId) -> PlayCommand {
        PlayCommand::new(game_id, self.pit_idx, self.version)
    }
}
