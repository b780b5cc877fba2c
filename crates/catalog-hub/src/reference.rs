use std::fmt;

use url::Url;

use crate::error::HubError;

/// Host accepted by [`RepoReference::parse`].
pub const DEFAULT_HUB_HOST: &str = "huggingface.co";

/// An `owner/repo` pair taken from a hub model URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoReference {
    pub owner: String,
    pub repo: String,
}

impl RepoReference {
    /// Parse a `https://huggingface.co/<owner>/<repo>[/...]` URL.
    pub fn parse(input: &str) -> Result<Self, HubError> {
        Self::parse_for_host(input, DEFAULT_HUB_HOST)
    }

    /// Parse a model URL served from `host` (a mirror, or a local test server).
    ///
    /// A single trailing slash is ignored, as is anything after the repo
    /// segment (`/tree/main`, `/blob/...`). The host match ignores scheme and port.
    pub fn parse_for_host(input: &str, host: &str) -> Result<Self, HubError> {
        if input.trim().is_empty() {
            return Err(HubError::InvalidReference(
                "Please provide a Hugging Face repo URL.".to_owned(),
            ));
        }

        let trimmed = input.strip_suffix('/').unwrap_or(input);
        let url = Url::parse(trimmed)
            .map_err(|e| HubError::InvalidReference(format!("Invalid URL {trimmed:?}: {e}")))?;

        if !url.host_str().is_some_and(|h| h.eq_ignore_ascii_case(host)) {
            return Err(HubError::InvalidReference(format!("Not a {host} URL")));
        }

        let mut segments = url.path().trim_start_matches('/').split('/');
        match (segments.next(), segments.next()) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: owner.to_owned(),
                repo: repo.to_owned(),
            }),
            _ => Err(HubError::InvalidReference("URL missing owner or repo".to_owned())),
        }
    }

    /// `<owner>/<repo>`, casing preserved.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
