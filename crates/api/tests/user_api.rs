//! HTTP-level integration tests for the `/user` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

fn user_body(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({"name": name, "email": email, "password": "secret"})
}

// ---------------------------------------------------------------------------
// POST /user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/user", user_body("Luke", "luke@rebels.org")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Luke");
    assert_eq!(json["user"]["email"], "luke@rebels.org");
    assert!(json["user"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_missing_field_returns_400(pool: SqlitePool) {
    for body in [
        serde_json::json!({"email": "a@b.c", "password": "x"}),
        serde_json::json!({"name": "A", "password": "x"}),
        serde_json::json!({"name": "A", "email": "a@b.c"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/user", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // No row was persisted by any of the rejected requests.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/user").await).await;
    assert_eq!(json["users"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_duplicate_email_permitted(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/user", user_body("Luke", "same@rebels.org")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/user", user_body("Other", "same@rebels.org")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// GET /user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_returns_all_created(pool: SqlitePool) {
    for i in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/user",
            user_body(&format!("user{i}"), &format!("u{i}@x.org")),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/user").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["name"], "user0");
}

// ---------------------------------------------------------------------------
// PUT /user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user_partial_patch(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/user", user_body("Luke", "luke@rebels.org")).await).await;
    let id = created["user"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/user",
        serde_json::json!({"id": id, "name": "Luke Skywalker"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Luke Skywalker");
    // Fields absent from the body keep their stored values.
    assert_eq!(json["user"]["email"], "luke@rebels.org");
    assert_eq!(json["user"]["password"], "secret");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user_missing_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/user", serde_json::json!({"name": "No Id"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/user",
        serde_json::json!({"id": 999, "name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// DELETE /user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_returns_200(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/user", user_body("Luke", "luke@rebels.org")).await).await;
    let id = created["user"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/user?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "User deleted successfully");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/user").await).await;
    assert_eq!(json["users"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_missing_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/user").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_user_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/user", user_body("Luke", "luke@rebels.org")).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/user?id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Table left unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/user").await).await;
    assert_eq!(json["users"].as_array().unwrap().len(), 1);
}
