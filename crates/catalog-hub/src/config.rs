//! Hub connection settings, loaded from environment variables.

use url::Url;

use crate::error::HubError;

/// Public Hugging Face endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// How to reach the model hub.
///
/// Every field has a default so the converter works without any environment
/// variables set.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL of the hub, e.g. `"https://huggingface.co"` or a mirror.
    /// Repository URLs must be on the same host.
    pub endpoint: String,

    /// Bearer token for gated or private repositories.
    pub token: Option<String>,

    /// HTTP/HTTPS proxy URL.
    pub proxy: Option<String>,

    pub user_agent: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            token: None,
            proxy: None,
            user_agent: concat!("catalog-hub/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl HubConfig {
    /// Build [`HubConfig`] from `HF_ENDPOINT`, `HF_TOKEN` and
    /// `HTTPS_PROXY` / `HTTP_PROXY`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: non_empty_env("HF_ENDPOINT").unwrap_or(defaults.endpoint),
            token: non_empty_env("HF_TOKEN"),
            proxy: non_empty_env("HTTPS_PROXY").or_else(|| non_empty_env("HTTP_PROXY")),
            user_agent: defaults.user_agent,
        }
    }

    /// Override the hub endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Host name repository URLs are expected to use.
    pub fn host(&self) -> Result<String, HubError> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            HubError::InvalidReference(format!("invalid hub endpoint {:?}: {e}", self.endpoint))
        })?;
        url.host_str().map(str::to_owned).ok_or_else(|| {
            HubError::InvalidReference(format!("hub endpoint {:?} has no host", self.endpoint))
        })
    }

    /// `GET` target for a repository's model info.
    pub fn model_info_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/api/models/{owner}/{repo}", self.endpoint.trim_end_matches('/'))
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
