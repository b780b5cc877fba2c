use serde::{Deserialize, Serialize};

/// The subset of `GET /api/models/<owner>/<repo>` this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteModelMetadata {
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    /// Repository file listing, in the order the hub returned it.
    #[serde(default)]
    pub siblings: Vec<SiblingFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingFile {
    /// Path relative to the repository root.
    pub rfilename: String,
    /// Only reported when the hub is asked for blob details.
    #[serde(default)]
    pub size: Option<u64>,
}

impl SiblingFile {
    pub fn new(rfilename: impl Into<String>) -> Self {
        Self {
            rfilename: rfilename.into(),
            size: None,
        }
    }
}
