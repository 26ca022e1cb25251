use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use campus_agents::{AssistantReply, CampusAssistant, ChatInput};
use campus_core::{AssistantConfig, Category, DirectoryRecord, IntentResolver};
use campus_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Clone)]
pub struct ApiState {
    assistant: CampusAssistant,
    metrics: Arc<AppMetrics>,
}

impl ApiState {
    pub fn new(resolver: Arc<IntentResolver>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            assistant: CampusAssistant::new(resolver, metrics.clone()),
            metrics,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContactsResponse {
    records: Vec<DirectoryRecord>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    rules_loaded: usize,
    directory_records: usize,
    metrics: MetricsSnapshot,
}

pub fn build_app(config: AssistantConfig) -> Result<Router> {
    let resolver =
        Arc::new(IntentResolver::new(config).context("failed to initialize intent resolver")?);
    Ok(build_router(ApiState::new(resolver, AppMetrics::shared())))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/chat", post(chat))
        .route("/v1/contacts", get(contacts))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let resolver = state.assistant.resolver();
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        rules_loaded: resolver.rules().len(),
        directory_records: resolver.directory().len(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    if request.text.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "empty_text",
            "text must contain at least one non-whitespace character",
        );
    }

    let reply: AssistantReply = state.assistant.reply(ChatInput { text: request.text });
    (StatusCode::OK, Json(reply)).into_response()
}

async fn contacts(State(state): State<ApiState>, Query(query): Query<ContactsQuery>) -> Response {
    let categories = match query.category.as_deref().filter(|value| !value.trim().is_empty()) {
        Some(raw) => match Category::parse(raw) {
            Some(category) => vec![category],
            None => {
                warn!(category = %raw, "unknown contacts category");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid_category",
                    "category must be one of office, faculty, student_body",
                );
            }
        },
        None => Category::ALL.to_vec(),
    };

    let needle = query.q.unwrap_or_default();
    let records = categories
        .into_iter()
        .flat_map(|category| state.assistant.contacts(category, &needle))
        .collect();

    (StatusCode::OK, Json(ContactsResponse { records })).into_response()
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}
