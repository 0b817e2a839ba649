//! User entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// DTO for creating a new user. All three fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Patch for updating an existing user. Only non-`None` fields are applied;
/// absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
