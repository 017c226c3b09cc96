//! Error-to-response mapping for the games API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::RepositoryError;
use crate::usecases::{CreateGameError, PlayError};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Union of the failures a games endpoint can produce.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// Game creation failed.
    #[display("{_0}")]
    Create(CreateGameError),
    /// Playing a move failed.
    #[display("{_0}")]
    Play(PlayError),
    /// A direct repository lookup failed.
    #[display("{_0}")]
    Repository(RepositoryError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Create(CreateGameError::Settings(_)) => StatusCode::BAD_REQUEST,
            ApiError::Create(CreateGameError::Repository(err)) => repository_status(err),
            ApiError::Play(PlayError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Play(PlayError::Repository(err)) => repository_status(err),
            ApiError::Repository(err) => repository_status(err),
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
        RepositoryError::VersionConflict => StatusCode::CONFLICT,
        RepositoryError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(%status, error = %self, "Request failed");

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameId;
    use crate::rules::ValidationError;
    use crate::usecases::InvalidSettings;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::Play(PlayError::Validation(ValidationError::PitHasNoStones {
            pit_idx: 2,
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_settings_map_to_bad_request() {
        let err = ApiError::Create(CreateGameError::Settings(InvalidSettings::new(
            "total players [9] must be between 2 and 5".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_and_conflict_statuses() {
        let not_found = ApiError::Repository(RepositoryError::NotFound {
            id: GameId::new_v4(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = ApiError::Play(PlayError::Repository(RepositoryError::VersionConflict));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
    }
}
