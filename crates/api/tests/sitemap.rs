//! Sitemap endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sitemap_lists_registered_routes(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let routes = json["routes"].as_array().unwrap();
    assert!(!routes.is_empty());

    let has = |method: &str, path: &str| {
        routes
            .iter()
            .any(|r| r["method"] == method && r["path"] == path)
    };
    assert!(has("GET", "/user"));
    assert!(has("POST", "/user"));
    assert!(has("PUT", "/user"));
    assert!(has("DELETE", "/user"));
    assert!(has("POST", "/favourites/characters"));
    assert!(has("GET", "/health"));
}
