//! Repository for the `planets` table.

use holocron_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planet::{CreatePlanet, Planet};

const COLUMNS: &str = "id, name, population";

/// Provides read/insert operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, population)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.population)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id ASC");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }
}
