//! Response envelope types for API handlers.
//!
//! The wire contract wraps each payload in a named envelope
//! (`{"user": ...}`, `{"users": [...]}`, `{"favourite": ...}`) rather than a
//! generic `data` key. Typed structs keep that contract in one place instead
//! of ad-hoc `serde_json::json!` literals in handlers.

use holocron_db::models::favourite::FavouriteCharacter;
use holocron_db::models::user::User;
use serde::Serialize;

/// `{"user": {...}}` envelope for single-user responses.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// `{"users": [...]}` envelope for the user list.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// `{"favourite": {...}}` envelope for favourite-link responses.
#[derive(Debug, Serialize)]
pub struct FavouriteCharacterResponse {
    pub favourite: FavouriteCharacter,
}

/// `{"msg": ...}` envelope for plain status messages.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
