//! REST surface for the games service.
//!
//! The handlers contain no game logic: they translate requests into
//! use-case commands and domain values into response views.

mod error;
mod requests;
mod responses;
mod routes;

pub use error::{ApiError, ErrorResponse};
pub use requests::{CreateNewGameRequest, PlayRequest};
pub use responses::{BoardResponse, GameResponse};
pub use routes::{AppState, games_router};
