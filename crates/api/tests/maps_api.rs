//! Integration tests for the /api/maps endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: repeated upsert overwrites a single row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn second_upsert_overwrites_the_modifier(pool: PgPool) {
    let app = common::build_test_app(pool);

    for modifier in [1.5, 2.0] {
        let response = post_json(
            app.clone(),
            "/api/maps",
            json!({"name": "Doomwood", "modifier": modifier}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/maps").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], json!({"Doomwood": 2.0}));
}

// ---------------------------------------------------------------------------
// Test: invalid map payloads are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_modifier_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/maps",
        json!({"name": "Doomwood", "modifier": -0.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/maps", json!({"name": "???", "modifier": 1.0})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: bulk upsert drops invalid items, rejects an all-invalid batch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_upsert_counts_only_valid_items(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/maps/bulk",
        json!([
            {"name": "Doomwood", "modifier": 1.5},
            {"name": "", "modifier": 1.0},
            {"name": "Yulgar", "modifier": -2.0},
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["updated"], 1);

    let listing = body_json(get(app, "/api/maps").await).await;
    assert_eq!(listing["data"], json!({"Doomwood": 1.5}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_upsert_with_nothing_valid_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/maps/bulk",
        json!([{"name": "", "modifier": 1.0}]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: DELETE removes the map, 404 when absent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_the_map(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/api/maps",
        json!({"name": "Doomwood", "modifier": 1.5}),
    )
    .await;

    let response = delete(app.clone(), "/api/maps/Doomwood").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/maps").await).await;
    assert_eq!(json["data"], json!({}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_an_unknown_map_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/maps/Nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
