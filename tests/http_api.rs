//! HTTP surface: session token checks, route matching and status codes.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use snooker_scorer_back::{
    config::AppConfig,
    dao::match_store::memory::InMemoryMatchStore,
    routes,
    state::{AppState, SharedState},
};
use tower::ServiceExt;

const TOKEN: &str = "x-auth-token";

async fn app_with_store() -> (Router, SharedState) {
    let state = AppState::new(AppConfig::default());
    state
        .install_match_store(Arc::new(InMemoryMatchStore::new()))
        .await;
    (routes::router(state.clone()), state)
}

fn get(uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header(TOKEN, user);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, user: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(TOKEN, user)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_or_blank_token_is_unauthorized() {
    let (app, _) = app_with_store().await;

    let response = app
        .clone()
        .oneshot(get("/matches/history", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("X-Auth-Token"));

    let response = app
        .clone()
        .oneshot(get("/matches/stats", Some("   ")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(post_json("/matches", "", json!({ "mode": "1v1" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthcheck_needs_no_token() {
    let (app, _) = app_with_store().await;

    let response = app.oneshot(get("/healthcheck", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn history_and_stats_are_not_taken_for_match_ids() {
    let (app, _) = app_with_store().await;

    let response = app
        .clone()
        .oneshot(get("/matches/history", Some("alice")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    let response = app
        .oneshot(get("/matches/stats", Some("alice")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = json_body(response).await;
    assert_eq!(stats["matches_played"], 0);
    assert_eq!(stats["highest_break"], 0);
}

#[tokio::test]
async fn history_is_unavailable_in_degraded_mode() {
    let app = routes::router(AppState::new(AppConfig::default()));

    let response = app
        .oneshot(get("/matches/history", Some("alice")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn match_lifecycle_over_http() {
    let (app, state) = app_with_store().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/matches",
            "alice",
            json!({ "mode": "century", "participant_count": 3, "names": { "0": "Ann" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let board = json_body(response).await;
    let id = board["id"].as_str().unwrap().to_owned();
    assert_eq!(board["players"][0]["name"], "Ann");
    assert_eq!(board["players"][2]["name"], "Player 3");

    let response = app
        .clone()
        .oneshot(get(&format!("/matches/{id}"), Some("bob")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/matches/{id}/events"),
            "alice",
            json!({ "target": { "kind": "player", "id": 1 }, "delta": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/matches/{id}/events"),
            "alice",
            json!({ "target": { "kind": "player", "id": 1 }, "delta": 10 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["players"][1]["score"], 10);

    let response = app
        .clone()
        .oneshot(post_json(&format!("/matches/{id}/finish"), "alice", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = json_body(response).await;
    assert_eq!(outcome["winner"], "Player 2");
    assert_eq!(outcome["is_draw"], false);
    assert_eq!(state.live_match_count(), 0);

    let response = app
        .oneshot(post_json(&format!("/matches/{id}/finish"), "alice", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn overlong_setup_names_are_rejected() {
    let (app, state) = app_with_store().await;

    let response = app
        .oneshot(post_json(
            "/matches",
            "alice",
            json!({ "mode": "1v1", "names": { "player1": "x".repeat(80) } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.live_match_count(), 0);
}
