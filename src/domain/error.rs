//! Domain error types for game persistence.

use derive_more::{Display, Error};

use super::game::GameId;

/// Errors surfaced by [`GamesRepository`](super::GamesRepository)
/// implementations.
#[derive(Debug, Clone, Display, Error)]
pub enum RepositoryError {
    /// No game exists with the given id, or with the given id-and-version
    /// pair (a stale read is indistinguishable from a missing game).
    #[display("game with id [{id}] not found")]
    NotFound {
        /// Identifier that failed to resolve.
        id: GameId,
    },
    /// The optimistic update lost a race on the version column. No write
    /// was applied; the caller must refetch and decide whether to retry.
    #[display("version mismatch")]
    VersionConflict,
    /// The storage backend failed.
    #[display("storage error: {message}")]
    Storage {
        /// Backend failure description.
        message: String,
    },
}
