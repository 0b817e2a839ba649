//! Repository for the `characters` table.

use holocron_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter};

const COLUMNS: &str = "id, name, eye_color, hair_color";

/// Provides read/insert operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, eye_color, hair_color)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.eye_color)
            .bind(&input.hair_color)
            .fetch_one(pool)
            .await
    }

    /// Find a character by id.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }
}
