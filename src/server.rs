//! HTTP API for on-demand article scoring.
//!
//! A single route: `GET /?urls=<comma-separated list>`. Well-formed
//! requests always answer 200 with one [`ArticleResult`] per URL in
//! completion order — individual article failures ride along inside the
//! array. Only malformed requests (missing, empty, or too many `urls`)
//! produce a 400, and the URL-count guard runs before any fetch is
//! launched.

use std::net::SocketAddr;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument};

use crate::process::{AnalysisContext, process_many};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub ctx: AnalysisContext,
    pub url_limit: usize,
}

/// Query parameters for the scoring endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub urls: Option<String>,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Score every URL in the `urls` query parameter.
pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let Some(raw_urls) = params.urls.filter(|raw| !raw.trim().is_empty()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "pass urls list in request".to_string(),
        );
    };

    let urls: Vec<String> = raw_urls
        .split(',')
        .map(|url| url.trim().to_string())
        .collect();
    if urls.len() > state.url_limit {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!(
                "too many urls in request, should be {} or less",
                state.url_limit
            ),
        );
    }

    match process_many(&state.ctx, urls).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => {
            error!(error = %err, "Batch processing failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal processing error".to_string(),
            )
        }
    }
}

/// Create the router with the single scoring route.
pub fn create_router(state: AppState) -> Router {
    Router::new().route("/", get(analyze)).with_state(state)
}

/// Bind and serve the API until the process is stopped.
#[instrument(level = "info", skip_all, fields(port))]
pub async fn run(port: u16, state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
