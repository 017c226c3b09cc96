//! Database models for persisted games.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};
use crate::domain::Game;

/// Stored game row: the aggregate serialized as a JSON document plus the
/// version column used by the compare-and-swap predicate.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRecord {
    id: String,
    version: i32,
    document: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl GameRecord {
    /// Deserializes the stored document into a domain [`Game`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the document does not parse.
    pub fn to_game(&self) -> Result<Game, DbError> {
        Ok(serde_json::from_str(&self.document)?)
    }
}

/// Insertable row for a newly created game.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::games)]
pub struct NewGameRecord {
    id: String,
    version: i32,
    document: String,
}
