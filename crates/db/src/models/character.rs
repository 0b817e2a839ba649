//! Character entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub eye_color: String,
    pub hair_color: String,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub eye_color: String,
    pub hair_color: String,
}
