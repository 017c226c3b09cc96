//! Route handlers for the games API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tracing::instrument;

use crate::domain::{GameId, GamesRepository};
use crate::rules::{MancalaRulesEngine, RulesEngine};
use crate::usecases::{CreateNewGameUseCase, FindGameByIdUseCase, PlayUseCase};

use super::error::ApiError;
use super::requests::{CreateNewGameRequest, PlayRequest};
use super::responses::GameResponse;

/// Shared handler state: the wired use cases.
#[derive(Clone)]
pub struct AppState {
    create_use_case: CreateNewGameUseCase,
    find_use_case: FindGameByIdUseCase,
    play_use_case: PlayUseCase,
}

impl AppState {
    /// Wires the use cases over the given repository and the standard
    /// rules engine.
    pub fn new(games: Arc<dyn GamesRepository>) -> Self {
        let engine: Arc<dyn RulesEngine> = Arc::new(MancalaRulesEngine::new());
        Self {
            create_use_case: CreateNewGameUseCase::new(games.clone()),
            find_use_case: FindGameByIdUseCase::new(games.clone()),
            play_use_case: PlayUseCase::new(games, engine),
        }
    }
}

/// Builds the games API router.
pub fn games_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/games", post(create))
        .route("/api/v1/games/{game_id}", get(find_by_id))
        .route("/api/v1/games/{game_id}/play", put(play))
        .with_state(state)
}

#[instrument(skip(state, request))]
async fn create(
    State(state): State<AppState>,
    request: Option<Json<CreateNewGameRequest>>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let command = request
        .map(|Json(request)| request.to_command())
        .unwrap_or_default();

    let game = state.create_use_case.create_new_game(command)?;
    Ok((StatusCode::CREATED, Json(GameResponse::from_game(&game))))
}

#[instrument(skip(state))]
async fn find_by_id(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.find_use_case.find_game(game_id)?;
    Ok(Json(GameResponse::from_game(&game)))
}

#[instrument(skip(state, request))]
async fn play(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(request): Json<PlayRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state.play_use_case.play(request.to_command(game_id))?;
    Ok(Json(GameResponse::from_game(&game)))
}
