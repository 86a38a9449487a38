//! Integration tests for the `/projects` and `/content` resources.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router, backed by the in-memory store and the test doubles from
//! `common`.

mod common;

use std::io::Cursor;
use std::sync::Arc;

use axum::http::StatusCode;
use clipforge_core::types::EntityId;

use common::{
    body_bytes, body_json, build_test_app, build_test_app_with, create_project, delete, get,
    post_empty, post_json, FailingStructurer, StaticStructurer, StubRenderer,
    UnavailableRenderer, SAMPLE_SCRIPT,
};

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_version() {
    let app = build_test_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Project creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_returns_201_with_false_flags() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        serde_json::json!({ "script": SAMPLE_SCRIPT }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Netflix AI");
    assert_eq!(json["has_carousel"], false);
    assert_eq!(json["has_animations"], false);
    assert_eq!(json["has_preview"], false);
    assert_eq!(json["carousels"], serde_json::json!([]));
    assert_eq!(json["animations"], serde_json::json!([]));
    assert_eq!(json["previews"], serde_json::json!([]));
}

#[tokio::test]
async fn create_project_with_blank_script_returns_400() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        serde_json::json!({ "script": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_project_ai_failure_returns_opaque_500() {
    let app = build_test_app_with(Arc::new(FailingStructurer), Arc::new(StubRenderer));
    let response = post_json(
        &app,
        "/api/v1/projects",
        serde_json::json!({ "script": SAMPLE_SCRIPT }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENERATION_FAILED");
    // The upstream failure detail must not leak.
    assert!(!json["error"].as_str().unwrap().contains("upstream"));
}

// ---------------------------------------------------------------------------
// Fetch / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_missing_project_returns_404() {
    let app = build_test_app();
    let response = get(&app, &format!("/api/v1/projects/{}", EntityId::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_project_then_get_returns_404() {
    let app = build_test_app();
    let id = create_project(&app).await;

    let response = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_projects_includes_created_projects() {
    let app = build_test_app();
    create_project(&app).await;

    let response = get(&app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Generation steps
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_carousel_sets_the_flag() {
    let app = build_test_app();
    let id = create_project(&app).await;

    let response = post_empty(&app, &format!("/api/v1/projects/{id}/generate/carousel")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["has_carousel"], true);
    assert_eq!(json["carousels"][0]["status"], "COMPLETED");
    assert_eq!(json["carousels"][0]["slides"][0]["slide_number"], 1);
}

#[tokio::test]
async fn generate_step_on_missing_project_returns_404() {
    let app = build_test_app();
    let response = post_empty(
        &app,
        &format!("/api/v1/projects/{}/generate/animations", EntityId::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_all_populates_every_family() {
    let app = build_test_app();
    let id = create_project(&app).await;

    let response = post_empty(&app, &format!("/api/v1/projects/{id}/generate")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["has_carousel"], true);
    assert_eq!(json["has_animations"], true);
    assert_eq!(json["has_preview"], true);
    assert_eq!(json["previews"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Download
// ---------------------------------------------------------------------------

#[tokio::test]
async fn download_missing_project_returns_404() {
    let app = build_test_app();
    let response = get(&app, &format!("/api/v1/projects/{}/download", EntityId::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn download_streams_a_zip_of_rendered_previews() {
    let app = build_test_app();
    let id = create_project(&app).await;
    post_empty(&app, &format!("/api/v1/projects/{id}/generate/previews")).await;

    let response = get(&app, &format!("/api/v1/projects/{id}/download")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/zip"
    );
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"netflix_ai.zip\""
    );

    let bytes = body_bytes(response).await;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.starts_with("previews/")));
}

#[tokio::test]
async fn download_without_browser_returns_503() {
    let app = build_test_app_with(Arc::new(StaticStructurer), Arc::new(UnavailableRenderer));
    let id = create_project(&app).await;
    post_empty(&app, &format!("/api/v1/projects/{id}/generate/previews")).await;

    let response = get(&app, &format!("/api/v1/projects/{id}/download")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "RENDERING_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_script_returns_the_structured_script() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/content/script/generate",
        serde_json::json!({ "script": SAMPLE_SCRIPT }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["folder_name"], "netflix_ai");
    assert!(json["sections"].is_array());
}

#[tokio::test]
async fn generate_script_with_empty_body_field_returns_400() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/v1/content/script/generate",
        serde_json::json!({ "script": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
