//! Handlers for the `/user` resource.
//!
//! Required fields are deserialized as `Option`s and checked in the handler
//! so a missing field produces the application's own 400 body instead of a
//! framework rejection.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::user::{CreateUser, UpdateUser};
use holocron_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, UserListResponse, UserResponse};
use crate::state::AppState;

/// Request body for `POST /user`. All fields required; presence is checked
/// in the handler.
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `PUT /user`: the target id plus a partial patch.
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub patch: UpdateUser,
}

/// Query parameters for `DELETE /user`.
#[derive(Debug, Deserialize)]
pub struct DeleteUserParams {
    pub id: Option<DbId>,
}

/// GET /user -- list all users. Unpaginated by contract.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<UserListResponse>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(UserListResponse { users }))
}

/// POST /user -- create a user from `{name, email, password}`.
///
/// Duplicate emails are permitted; no uniqueness check is performed.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let (Some(name), Some(email), Some(password)) = (body.name, body.email, body.password) else {
        return Err(AppError::missing_fields());
    };

    let input = CreateUser {
        name,
        email,
        password,
    };
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// PUT /user -- partial update from `{id, name?, email?, password?}`.
///
/// Fields absent from the body keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateUserBody>,
) -> AppResult<Json<UserResponse>> {
    let Some(id) = body.id else {
        return Err(AppError::missing_fields());
    };

    let user = UserRepo::update(&state.pool, id, &body.patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse { user }))
}

/// DELETE /user?id={id} -- delete a user by id.
///
/// Favourite links referencing the user are left alone; while any exist the
/// storage engine refuses the delete and the response is 409.
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteUserParams>,
) -> AppResult<Json<MessageResponse>> {
    let Some(id) = params.id else {
        return Err(AppError::Core(CoreError::Validation(
            "User ID is required".to_string(),
        )));
    };

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            msg: "User deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
