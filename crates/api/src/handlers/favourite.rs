//! Handlers for the `/favourites` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_core::types::DbId;
use holocron_db::models::favourite::CreateFavouriteCharacter;
use holocron_db::repositories::FavouriteCharacterRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::FavouriteCharacterResponse;
use crate::state::AppState;

/// Request body for `POST /favourites/characters`.
#[derive(Debug, Deserialize)]
pub struct CreateFavouriteCharacterBody {
    pub user_id: Option<DbId>,
    pub character_id: Option<DbId>,
}

/// POST /favourites/characters -- link a user to a favourite character.
///
/// No existence check on either id before the insert; a dangling reference
/// is rejected by the foreign key constraint and classified to 409. The same
/// pair may be linked more than once.
pub async fn add_character(
    State(state): State<AppState>,
    Json(body): Json<CreateFavouriteCharacterBody>,
) -> AppResult<(StatusCode, Json<FavouriteCharacterResponse>)> {
    let (Some(user_id), Some(character_id)) = (body.user_id, body.character_id) else {
        return Err(AppError::missing_fields());
    };

    let input = CreateFavouriteCharacter {
        user_id,
        character_id,
    };
    let favourite = FavouriteCharacterRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(FavouriteCharacterResponse { favourite }),
    ))
}
