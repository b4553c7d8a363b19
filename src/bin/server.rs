//! HTTP transport for the password analyzer.
//!
//! Exposes the analysis engine over three routes: `GET /` (service
//! identity), `POST /analyze` and `GET /health`. The reference dataset is
//! loaded once at startup; a missing or malformed dataset is fatal.
//!
//! Run with: cargo run --bin pwd-analyzer-server
//! Listen address via `PWD_ANALYZER_ADDR` (default 0.0.0.0:8000).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use pwd_analyzer::{
    AnalysisResult, AnalyzeRequest, ReferenceData, analyze_password, init_blocklist,
};

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Password Analyzer API",
        "standard": "NIST SP 800-63B",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze(
    State(data): State<Arc<ReferenceData>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let password = SecretString::new(req.password.into());
    Json(analyze_password(&password, &data))
}

fn router(data: Arc<ReferenceData>) -> Router {
    // CORS open to any origin, as the analyzer carries no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(data)
        .layer(cors)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data = init_blocklist()?;

    let addr: SocketAddr = std::env::var("PWD_ANALYZER_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;

    tracing::info!("Password Analyzer API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(data)).await?;

    Ok(())
}
