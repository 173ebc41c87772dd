//! Router tests that drive the production routing, validation, and error
//! mapping without any infrastructure.
//!
//! The store is backed by a lazy pool aimed at a port nothing listens on,
//! so the store-failure path runs for real; a 400 on an invalid body at the
//! same time proves validation short-circuits before the pool is touched.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

use postbox_api::router;
use postbox_api::state::{AppState, AppStateInner};
use postbox_db::MessageStore;

fn unreachable_state() -> AppState {
    // Discard port: connection attempts fail immediately, the short acquire
    // timeout keeps the 500 path fast.
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(9)
        .username("postbox")
        .database("postbox");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy_with(options);

    Arc::new(AppStateInner {
        store: MessageStore::new(pool),
    })
}

fn post_json(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_submission_with_store_down_returns_500() {
    let response = router(unreachable_state())
        .oneshot(post_json(r#"{"name":"Ann","email":"a@x.com","message":"Hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Failed to save message" })
    );
}

#[tokio::test]
async fn empty_field_returns_400_without_touching_the_store() {
    let response = router(unreachable_state())
        .oneshot(post_json(r#"{"name":"","email":"a@x.com","message":"Hi"}"#))
        .await
        .unwrap();

    // 400, not 500: the unreachable store was never asked.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "All fields are required" })
    );
}

#[tokio::test]
async fn missing_field_returns_400() {
    let response = router(unreachable_state())
        .oneshot(post_json(r#"{"email":"a@x.com","message":"Hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "All fields are required" })
    );
}

#[tokio::test]
async fn null_field_is_treated_as_missing() {
    let response = router(unreachable_state())
        .oneshot(post_json(r#"{"name":null,"email":"a@x.com","message":"Hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "All fields are required" })
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_by_the_extractor() {
    let response = router(unreachable_state())
        .oneshot(post_json(r#"{"name":"Ann""#))
        .await
        .unwrap();

    // axum's own Json rejection, not the fixed validation body.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_on_the_message_route_is_not_allowed() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/messages")
        .body(Body::empty())
        .unwrap();
    let response = router(unreachable_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
