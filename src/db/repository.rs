//! Database-backed games repository.

use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, GameRecord, NewGameRecord, schema};
use crate::domain::{Game, GameId, GamesRepository, RepositoryError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite implementation of [`GamesRepository`].
///
/// Each game is stored as a JSON document next to an indexed `version`
/// column; the update is a single `UPDATE ... WHERE id = ? AND version = ?`
/// so exactly one concurrent writer can win each version.
#[derive(Debug, Clone)]
pub struct SqliteGamesRepository {
    db_path: String,
}

impl SqliteGamesRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating SqliteGamesRepository");
        Ok(Self { db_path })
    }

    /// Applies any pending embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
        info!("Migrations applied");
        Ok(())
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

impl GamesRepository for SqliteGamesRepository {
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    fn create(&self, game: Game) -> Result<GameId, RepositoryError> {
        debug!("Storing new game");
        let mut conn = self.connection()?;

        let document = serde_json::to_string(&game).map_err(DbError::from)?;
        let record = NewGameRecord::new(game.id().to_string(), game.version() as i32, document);

        diesel::insert_into(schema::games::table)
            .values(&record)
            .execute(&mut conn)
            .map_err(DbError::from)?;

        info!(game_id = %game.id(), "Game created");
        Ok(game.id())
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: GameId) -> Result<Game, RepositoryError> {
        debug!("Loading game");
        let mut conn = self.connection()?;

        let record = schema::games::table
            .find(id.to_string())
            .first::<GameRecord>(&mut conn)
            .optional()
            .map_err(DbError::from)?
            .ok_or(RepositoryError::NotFound { id })?;

        Ok(record.to_game()?)
    }

    #[instrument(skip(self))]
    fn find_by_id_and_version(&self, id: GameId, version: u32) -> Result<Game, RepositoryError> {
        debug!("Loading game at exact version");
        let mut conn = self.connection()?;

        // a stale version reads the same as a missing game
        let record = schema::games::table
            .find(id.to_string())
            .filter(schema::games::version.eq(version as i32))
            .first::<GameRecord>(&mut conn)
            .optional()
            .map_err(DbError::from)?
            .ok_or(RepositoryError::NotFound { id })?;

        Ok(record.to_game()?)
    }

    #[instrument(skip(self, game), fields(game_id = %game.id(), version = game.version()))]
    fn update(&self, game: Game) -> Result<Game, RepositoryError> {
        debug!("Updating game");
        let mut conn = self.connection()?;

        let updated_game = game.with_version(game.version() + 1);
        let document = serde_json::to_string(&updated_game).map_err(DbError::from)?;

        let rows = diesel::update(
            schema::games::table
                .find(game.id().to_string())
                .filter(schema::games::version.eq(game.version() as i32)),
        )
        .set((
            schema::games::version.eq(updated_game.version() as i32),
            schema::games::document.eq(&document),
            schema::games::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .map_err(DbError::from)?;

        if rows == 0 {
            let known: bool = diesel::select(exists(
                schema::games::table.find(game.id().to_string()),
            ))
            .get_result(&mut conn)
            .map_err(DbError::from)?;

            if known {
                return Err(RepositoryError::VersionConflict);
            }
            return Err(RepositoryError::NotFound { id: game.id() });
        }

        info!(game_id = %updated_game.id(), version = updated_game.version(), "Game updated");
        Ok(updated_game)
    }
}
