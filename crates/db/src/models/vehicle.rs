//! Vehicle entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub model: String,
}

/// DTO for creating a new vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub name: String,
    pub model: String,
}
