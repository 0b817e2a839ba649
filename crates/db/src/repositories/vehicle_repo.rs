//! Repository for the `vehicles` table.

use holocron_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::vehicle::{CreateVehicle, Vehicle};

const COLUMNS: &str = "id, name, model";

/// Provides read/insert operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (name, model)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY id ASC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }
}
