mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;

use std::sync::Arc;

use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::agent::{GeminiAgentService, TextGenerator};
use crate::config::Config;
use crate::service::chat_service::ChatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "companion_chat=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();

    // ── Upstream provider ─────────────────────────────────────────────────────
    let generator: Option<Arc<dyn TextGenerator>> = match config.gemini_api_key.as_deref() {
        Some(key) => Some(Arc::new(GeminiAgentService::new(key)?) as Arc<dyn TextGenerator>),
        None => {
            warn!("GEMINI_API_KEY is not set; chat replies will be a configuration notice");
            None
        }
    };
    let chat_service = ChatService::new(generator);

    // ── Router ────────────────────────────────────────────────────────────────
    let allowed_origin = config
        .allowed_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()?;
    if let Some(dir) = &config.static_dir {
        info!("Serving frontend from {}", dir.display());
    }
    let app = routes::router(chat_service, config.static_dir.as_deref(), allowed_origin);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
