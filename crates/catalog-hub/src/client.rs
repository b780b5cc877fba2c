use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::HubConfig;
use crate::error::HubError;
use crate::metadata::RemoteModelMetadata;
use crate::reference::RepoReference;

/// Where repository metadata comes from.
///
/// [`HubClient`] talks to the real hub; tests substitute fixture data.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn model_info(&self, reference: &RepoReference) -> Result<RemoteModelMetadata, HubError>;
}

/// Single-shot HTTP client for the hub's model-info API.
///
/// No retries: a failed request is reported to the caller as-is.
pub struct HubClient {
    config: HubConfig,
    client: Client,
}

impl HubClient {
    pub fn new(config: HubConfig) -> Result<Self, HubError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(ref proxy_url) = config.proxy {
            match reqwest::Proxy::all(proxy_url) {
                Ok(p) => {
                    builder = builder.proxy(p);
                }
                Err(e) => {
                    warn!(proxy = %proxy_url, error = %e, "ignoring invalid proxy URL");
                }
            }
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }
}

#[async_trait]
impl MetadataSource for HubClient {
    async fn model_info(&self, reference: &RepoReference) -> Result<RemoteModelMetadata, HubError> {
        let url = self.config.model_info_url(&reference.owner, &reference.repo);
        debug!(%url, "fetching model metadata");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubError::FetchFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let meta: RemoteModelMetadata = response.json().await?;
        debug!(
            pipeline_tag = meta.pipeline_tag.as_deref().unwrap_or("<none>"),
            files = meta.siblings.len(),
            "model metadata received"
        );
        Ok(meta)
    }
}
