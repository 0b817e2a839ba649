//! Sitemap endpoint: a JSON listing of every registered route.
//!
//! The table below is maintained alongside route registration in
//! [`super::app_routes`] and [`super::health`].

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Every (method, path) pair the server responds to.
const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("PUT", "/user"),
    ("DELETE", "/user"),
    ("POST", "/favourites/characters"),
];

/// A single sitemap entry.
#[derive(Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Sitemap response payload.
#[derive(Serialize)]
pub struct SitemapResponse {
    pub routes: Vec<RouteEntry>,
}

/// GET / -- list all registered routes.
async fn sitemap() -> Json<SitemapResponse> {
    let routes = ROUTES
        .iter()
        .map(|&(method, path)| RouteEntry { method, path })
        .collect();
    Json(SitemapResponse { routes })
}

/// Mount the sitemap route at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sitemap))
}
