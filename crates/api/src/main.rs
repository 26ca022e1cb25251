use std::env;

use anyhow::{Context, Result};
use campus_api::build_app;
use campus_core::AssistantConfig;
use campus_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("campus_api");

    let config = match env::var("CAMPUS_ASSISTANT_CONFIG") {
        Ok(path) => AssistantConfig::from_path(&path)
            .with_context(|| format!("failed loading assistant config from {path}"))?,
        Err(_) => AssistantConfig::campus_default(),
    };
    let bind = env::var("CAMPUS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "campus assistant api started");

    axum::serve(listener, app).await?;
    Ok(())
}
