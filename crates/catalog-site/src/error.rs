//! Site error type.
//!
//! Also implements [`axum::response::IntoResponse`] so API handlers can
//! return `Result<T, SiteError>` directly. Selection problems are the
//! caller's fault and are echoed back; everything else is logged and
//! reported generically.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An export was requested with nothing selected.
    #[error("no models selected")]
    EmptySelection,

    /// An export named an id that is not in the catalog.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            SiteError::EmptySelection => (StatusCode::BAD_REQUEST, self.to_string()),
            SiteError::UnknownModel(_) => (StatusCode::NOT_FOUND, self.to_string()),
            other => {
                error!(error = %other, "catalog request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
