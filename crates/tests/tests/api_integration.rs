use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::Arc;

use campus_api::{build_app, build_router, ApiState};
use campus_core::{AssistantConfig, ContactEntry, DirectoryConfig, IntentResolver, IntentRule};
use campus_observability::AppMetrics;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(AssistantConfig::campus_default()).expect("app should build")
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn chat_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_loaded_tables() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["rules_loaded"], 3);
    assert_eq!(parsed["directory_records"], 29);
}

#[tokio::test]
async fn chat_returns_keyword_reply() {
    let response = app()
        .oneshot(chat_request("what's in the mess today"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["tier"], "keyword");
    assert_eq!(parsed["rule_id"], "mess_menu");
    assert_eq!(parsed["matched_token"], "mess");
    assert!(parsed["reply_text"]
        .as_str()
        .is_some_and(|text| text.contains("Mess Menu")));
}

#[tokio::test]
async fn chat_returns_directory_record() {
    let response = app().oneshot(chat_request("where is the director")).await.unwrap();

    let parsed = read_json(response).await;
    assert_eq!(parsed["tier"], "directory");
    assert_eq!(parsed["record"]["name"], "Prof. Santanu Chattopadhyay");
    assert_eq!(parsed["record"]["category"], "office");
}

#[tokio::test]
async fn chat_rejects_blank_text() {
    let response = app().oneshot(chat_request("   ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "empty_text");
}

#[tokio::test]
async fn contacts_filter_by_category_and_query() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/contacts?category=gymkhana&q=secretary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    let records = parsed["records"].as_array().expect("records array");
    assert_eq!(records.len(), 6);
    assert!(records
        .iter()
        .all(|record| record["category"] == "student_body"));
}

#[tokio::test]
async fn contacts_without_category_scan_everything() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/contacts?q=mukherjee")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let parsed = read_json(response).await;
    let names = parsed["records"]
        .as_array()
        .expect("records array")
        .iter()
        .map(|record| record["name"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Dr. Kaoushik K Mukherjee", "Dr. Imon Mukherjee"]
    );
}

#[tokio::test]
async fn contacts_reject_unknown_category() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/contacts?category=library")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "invalid_category");
}

#[tokio::test]
async fn router_serves_caller_supplied_tables() {
    let resolver = IntentResolver::new(AssistantConfig {
        rules: vec![IntentRule::new("library", &["book"], "Library opens at 9.")],
        directory: DirectoryConfig {
            office: vec![ContactEntry::new("Library Desk", "Librarian", "lib@x")],
            ..DirectoryConfig::default()
        },
        ..AssistantConfig::campus_default()
    })
    .expect("config should be valid");
    let metrics = AppMetrics::shared();
    let app = build_router(ApiState::new(Arc::new(resolver), metrics.clone()));

    let response = app.oneshot(chat_request("book renewal")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["reply_text"], "Library opens at 9.");
    assert_eq!(parsed["rule_id"], "library");
    assert_eq!(metrics.snapshot().keyword_total, 1);
}
