//! Persistence contract for game aggregates.

use super::error::RepositoryError;
use super::game::{Game, GameId};

/// Optimistic-concurrency CRUD contract for [`Game`] aggregates.
///
/// Implementations serialize concurrent writers on the game's version:
/// exactly one update succeeds per version and all others observe
/// [`RepositoryError::VersionConflict`]. Retrying is the caller's policy,
/// never the repository's.
pub trait GamesRepository: Send + Sync {
    /// Persists a new game and returns its identifier.
    fn create(&self, game: Game) -> Result<GameId, RepositoryError>;

    /// Retrieves a game by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no game has the identifier.
    fn find_by_id(&self, id: GameId) -> Result<Game, RepositoryError>;

    /// Retrieves a game at an exact version.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the identifier is unknown
    /// or the stored version differs from `version`.
    fn find_by_id_and_version(&self, id: GameId, version: u32) -> Result<Game, RepositoryError>;

    /// Compare-and-swap update: writes only if the stored version equals
    /// `game.version()`, persisting the game at `version + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the identifier is unknown,
    /// or [`RepositoryError::VersionConflict`] if the stored version moved
    /// on; no partial write is applied in either case.
    fn update(&self, game: Game) -> Result<Game, RepositoryError>;
}
