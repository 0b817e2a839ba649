//! Planet entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
///
/// `population` is stored as text, matching the legacy schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub population: String,
}

/// DTO for creating a new planet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanet {
    pub name: String,
    pub population: String,
}
