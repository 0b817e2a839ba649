pub mod health;
pub mod sitemap;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{favourite, user};
use crate::state::AppState;

/// Build the application route tree (everything except `/` and `/health`,
/// which are mounted by [`crate::router::build_app_router`]).
///
/// ```text
/// GET    /user                     -> list
/// POST   /user                     -> create
/// PUT    /user                     -> update
/// DELETE /user                     -> delete (query `id`)
///
/// POST   /favourites/characters    -> add_character
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            get(user::list)
                .post(user::create)
                .put(user::update)
                .delete(user::delete),
        )
        .route("/favourites/characters", post(favourite::add_character))
}
