//! Settings API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test that settings default to surface-click.
#[tokio::test]
async fn test_get_settings_default() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/settings").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["reveal_mode"], "surface-click");
}

/// Test that an existing settings file is loaded at startup.
#[tokio::test]
async fn test_get_settings_from_file() {
    let ctx = TestContext::with_settings_file(r#"{"reveal_mode":"hover"}"#).await;
    let server = TestServer::new(ctx.router()).unwrap();

    let body: serde_json::Value = server.get("/api/settings").await.json();
    assert_eq!(body["reveal_mode"], "hover");
}

/// Test that an invalid settings file falls back to defaults and can be repaired.
#[tokio::test]
async fn test_invalid_settings_file_uses_defaults() {
    let ctx = TestContext::with_settings_file(r#"{"reveal_mode":"double-click"}"#).await;
    let server = TestServer::new(ctx.router()).unwrap();

    let body: serde_json::Value = server.get("/api/settings").await.json();
    assert_eq!(body["reveal_mode"], "surface-click");

    server
        .put("/api/settings")
        .json(&fixtures::update_settings_request(Some("hover")))
        .await
        .assert_status_ok();
    assert_eq!(ctx.persisted_settings()["reveal_mode"], "hover");
}

/// Test updating and persisting the reveal mode.
#[tokio::test]
async fn test_update_settings() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .put("/api/settings")
        .json(&fixtures::update_settings_request(Some("button-click")))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["reveal_mode"], "button-click");

    // Visible to later reads and written to disk
    let body: serde_json::Value = server.get("/api/settings").await.json();
    assert_eq!(body["reveal_mode"], "button-click");
    assert_eq!(ctx.persisted_settings()["reveal_mode"], "button-click");
}

/// Test that an empty update keeps the current value.
#[tokio::test]
async fn test_update_settings_empty_body() {
    let ctx = TestContext::with_settings_file(r#"{"reveal_mode":"hover"}"#).await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .put("/api/settings")
        .json(&fixtures::update_settings_request(None))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["reveal_mode"], "hover");
}

/// Test that an unknown reveal mode is rejected and nothing is saved.
#[tokio::test]
async fn test_update_settings_unknown_mode() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .put("/api/settings")
        .json(&fixtures::update_settings_request(Some("double-click")))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
    assert!(!ctx.settings_path.exists());
}
