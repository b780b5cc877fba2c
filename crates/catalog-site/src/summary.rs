//! Flattened per-entry record shown by the catalog browser.

use std::collections::BTreeMap;

use catalog_types::KIND;
use serde::{Deserialize, Serialize};

/// What the browser needs to list, filter and export one catalog entry.
///
/// Built from the raw YAML document rather than a typed
/// [`catalog_types::ModelCatalog`] so hand-written entries with tasks or
/// engines this crate does not know about still show up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub task: String,
    pub engine: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_repo_url: Option<String>,
    /// The source document, key order preserved, re-emitted on export.
    pub original_yaml: serde_yaml::Value,
}

#[derive(Deserialize)]
struct DocumentView {
    metadata: MetadataView,
    spec: SpecView,
}

#[derive(Deserialize)]
struct MetadataView {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    labels: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Deserialize)]
struct SpecView {
    model: ModelView,
    engine: EngineView,
}

#[derive(Deserialize)]
struct ModelView {
    task: String,
    #[serde(default)]
    version: String,
}

#[derive(Deserialize)]
struct EngineView {
    engine: String,
}

impl CatalogSummary {
    /// Summarise one parsed YAML document.
    ///
    /// Returns `Ok(None)` for documents whose `kind` is not `ModelCatalog`
    /// (including empty documents) and an error when a `ModelCatalog` lacks
    /// the fields the browser needs.
    pub fn from_document(document: serde_yaml::Value) -> Result<Option<Self>, serde_yaml::Error> {
        if document.get("kind").and_then(serde_yaml::Value::as_str) != Some(KIND) {
            return Ok(None);
        }
        let view: DocumentView = serde_yaml::from_value(document.clone())?;
        let label = |key: &str| {
            view.metadata
                .labels
                .get(key)
                .and_then(serde_yaml::Value::as_str)
                .map(str::to_owned)
        };
        let icon_url = label("icon_url");
        let hf_repo_url = label("hf_repo_url");

        let display_name = view
            .metadata
            .display_name
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| view.metadata.name.clone());

        Ok(Some(Self {
            id: view.metadata.name.clone(),
            name: view.metadata.name,
            display_name,
            task: view.spec.model.task,
            engine: view.spec.engine.engine,
            version: view.spec.model.version,
            icon_url,
            hf_repo_url,
            original_yaml: document,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"
apiVersion: v1
kind: ModelCatalog
metadata:
  name: bge-m3
  display_name: BGE M3
  labels:
    icon_url: https://example.com/bge.png
    hf_repo_url: https://huggingface.co/BAAI/bge-m3
spec:
  model:
    registry: ""
    name: BAAI/bge-m3
    file: model.safetensors
    version: latest
    task: text-embedding
  engine:
    engine: vllm
    version: v1
"#;

    fn doc(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn flattens_catalog_fields() {
        let summary = CatalogSummary::from_document(doc(ENTRY)).unwrap().unwrap();
        assert_eq!(summary.id, "bge-m3");
        assert_eq!(summary.name, "bge-m3");
        assert_eq!(summary.display_name, "BGE M3");
        assert_eq!(summary.task, "text-embedding");
        assert_eq!(summary.engine, "vllm");
        assert_eq!(summary.version, "latest");
        assert_eq!(summary.icon_url.as_deref(), Some("https://example.com/bge.png"));
        assert_eq!(
            summary.hf_repo_url.as_deref(),
            Some("https://huggingface.co/BAAI/bge-m3")
        );
        assert_eq!(summary.original_yaml, doc(ENTRY));
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let text = ENTRY.replace("  display_name: BGE M3\n", "");
        let summary = CatalogSummary::from_document(doc(&text)).unwrap().unwrap();
        assert_eq!(summary.display_name, "bge-m3");
    }

    #[test]
    fn other_kinds_are_ignored() {
        let text = ENTRY.replace("kind: ModelCatalog", "kind: Workspace");
        assert!(CatalogSummary::from_document(doc(&text)).unwrap().is_none());
        assert!(CatalogSummary::from_document(serde_yaml::Value::Null).unwrap().is_none());
    }

    #[test]
    fn missing_task_is_an_error() {
        let text = ENTRY.replace("    task: text-embedding\n", "");
        assert!(CatalogSummary::from_document(doc(&text)).is_err());
    }

    #[test]
    fn json_uses_browser_field_names() {
        let summary = CatalogSummary::from_document(doc(ENTRY)).unwrap().unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["displayName"], "BGE M3");
        assert_eq!(value["hfRepoUrl"], "https://huggingface.co/BAAI/bge-m3");
        assert_eq!(value["originalYaml"]["spec"]["model"]["name"], "BAAI/bge-m3");
    }
}
