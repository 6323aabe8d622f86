//! HTTP-level integration tests for the fitting page.
//!
//! These tests prove the page contract end to end: the model dropdown on
//! GET, the selected-model rendering on POST, and the server-error paths
//! for a broken catalog or an unknown model name.

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{header, Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use tryon_web::router::build_router;
use tryon_web::state::AppState;

// ── Test app builder ───────────────────────────────────────────

const SAMPLE_CATALOG: &str = r#"{"RayBan": {"price": 100}, "Oakley": {"price": 80}}"#;

/// Build a router over a throwaway static dir. The `TempDir` must be kept
/// alive for as long as the router serves from it.
fn build_test_app(catalog_json: Option<&str>) -> (axum::Router, TempDir) {
    let static_dir = tempfile::tempdir().expect("tempdir");
    let models_dir = static_dir.path().join("glasses_models");
    std::fs::create_dir_all(&models_dir).expect("create models dir");

    let catalog_path = models_dir.join("glasses_models_names.json");
    if let Some(json) = catalog_json {
        std::fs::write(&catalog_path, json).expect("write catalog fixture");
    }

    let state = AppState::new(catalog_path, static_dir.path().to_path_buf());
    (build_router(state), static_dir)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_model(app: axum::Router, model: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(format!("model={}", model)))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

// ── Fitting page ───────────────────────────────────────────────

#[tokio::test]
async fn index_lists_every_model_once() {
    let (app, _static_dir) = build_test_app(Some(SAMPLE_CATALOG));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<option").count(), 2);
    assert!(body.contains("RayBan"));
    assert!(body.contains("Oakley"));
    // Nothing selected yet, so the overlay stays idle
    assert!(!body.contains("modelName"));
}

#[tokio::test]
async fn selecting_a_model_renders_its_data() {
    let (app, _static_dir) = build_test_app(Some(SAMPLE_CATALOG));

    let (status, body) = post_model(app, "RayBan").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<h2 id="modelName">RayBan</h2>"#));
    assert!(body.contains("<dt>price</dt><dd>100</dd>"));
    // The full name list is still offered alongside the selection
    assert!(body.contains(r#"<option value="RayBan" selected>RayBan</option>"#));
    assert!(body.contains(r#"<option value="Oakley">Oakley</option>"#));
}

#[tokio::test]
async fn unknown_model_is_a_server_error() {
    let (app, _static_dir) = build_test_app(Some(SAMPLE_CATALOG));

    let (status, _body) = post_model(app, "Gucci").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn dropdown_tracks_the_file_between_requests() {
    let (app, static_dir) = build_test_app(Some(SAMPLE_CATALOG));
    let catalog_path = static_dir
        .path()
        .join("glasses_models/glasses_models_names.json");

    let (_, before) = get(app.clone(), "/").await;
    assert!(!before.contains("Persol"));

    std::fs::write(&catalog_path, r#"{"Persol": {"price": 120}}"#)
        .expect("rewrite catalog fixture");

    let (status, after) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(after.contains("Persol"));
    assert!(!after.contains("RayBan"));
}

// ── Catalog failure paths ──────────────────────────────────────

#[tokio::test]
async fn missing_catalog_file_is_a_server_error() {
    let (app, _static_dir) = build_test_app(None);

    let (get_status, _) = get(app.clone(), "/").await;
    let (post_status, _) = post_model(app, "RayBan").await;

    assert_eq!(get_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(post_status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn malformed_catalog_is_a_server_error() {
    let (app, _static_dir) = build_test_app(Some("{ this is not json"));

    let (status, _) = get(app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ── Ops + static assets ────────────────────────────────────────

#[tokio::test]
async fn health_check_reports_ok() {
    let (app, _static_dir) = build_test_app(Some(SAMPLE_CATALOG));

    let (status, body) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).expect("health body is JSON");
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
}

#[tokio::test]
async fn static_assets_are_served_uncached() {
    let (app, static_dir) = build_test_app(Some(SAMPLE_CATALOG));
    let js_dir = static_dir.path().join("js");
    std::fs::create_dir_all(&js_dir).expect("create js dir");
    std::fs::write(js_dir.join("glasses.js"), "// overlay").expect("write js fixture");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/js/glasses.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-cache, no-store, must-revalidate"
    );
}
