use thiserror::Error;

use crate::task::{supported_pipeline_tags, supported_tasks};

/// Errors that can be returned while converting a hub repository.
///
/// None of these are recoverable: the caller reports the message and stops.
#[derive(Debug, Error)]
pub enum HubError {
    /// URL absent, on the wrong host, or missing the owner/repo segments.
    #[error("{0}")]
    InvalidReference(String),

    /// The metadata endpoint answered with a non-2xx status.
    #[error("HF API request failed: {status} {reason}")]
    FetchFailed { status: u16, reason: String },

    /// The request never produced a usable response (connect, TLS, body decode).
    #[error("HF API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The repository lists neither a `.gguf` nor a `.safetensors` file.
    #[error("No .gguf or .safetensors file found in repo")]
    NoSupportedArtifact,

    #[error("Model pipeline_tag is missing. Cannot determine task type.")]
    MissingPipelineTag,

    #[error(
        "Unsupported pipeline tag: \"{}\". Supported pipeline tags: {}. Only tasks [{}] are supported.",
        .tag,
        supported_pipeline_tags().join(", "),
        supported_tasks().join(", ")
    )]
    UnsupportedPipelineTag { tag: String },

    #[error("failed to render catalog as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to render catalog as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
