//! Axum router for the catalog browser.
//!
//! [`router`] serves:
//! - `GET  /api/models?search=&task=`: filtered summaries as JSON
//! - `GET  /api/tasks`: task drop-down options
//! - `POST /api/export` with `{"ids": [...]}`: selected entries as YAML
//! - everything else from the output directory (`index.html`, `data.js`, ...)

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::export::export_selected;
use crate::filter::{task_options, CatalogFilter, TaskOption};
use crate::summary::CatalogSummary;

/// Shared state injected into every handler.
#[derive(Debug)]
pub struct AppState {
    pub config: SiteConfig,
    /// Loaded once at startup; rebuild and restart to pick up edits.
    pub catalog: Vec<CatalogSummary>,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: Vec<CatalogSummary>) -> Self {
        Self { config, catalog }
    }
}

/// Build the complete router, static fallback and middleware included.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/models", get(list_models))
        .route("/api/tasks", get(list_tasks))
        .route("/api/export", post(export_models));

    Router::new()
        .merge(api)
        .fallback_service(ServeDir::new(&state.config.out_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

// ── handlers ─────────────────────────────────────────────────────────────────

async fn list_models(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CatalogFilter>,
) -> Json<Vec<CatalogSummary>> {
    Json(filter.apply(&state.catalog).into_iter().cloned().collect())
}

async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<TaskOption>> {
    Json(task_options(&state.catalog))
}

#[derive(Debug, Deserialize)]
struct ExportRequest {
    ids: Vec<String>,
}

async fn export_models(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, SiteError> {
    let yaml = export_selected(&state.catalog, &request.ids)?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

// ── middleware ───────────────────────────────────────────────────────────────

fn cors_layer(config: &SiteConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    let Some(origins_str) = &config.cors_allowed_origins else {
        return layer.allow_origin(Any);
    };

    let origins: Vec<axum::http::HeaderValue> = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
