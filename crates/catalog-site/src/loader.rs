//! Reading catalog summaries from YAML sources.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::SiteError;
use crate::summary::CatalogSummary;

/// Summarise every `ModelCatalog` document in `text`.
///
/// `text` may hold several `---`-separated documents; non-catalog documents
/// are skipped.
pub fn parse_catalog_str(text: &str) -> Result<Vec<CatalogSummary>, SiteError> {
    let mut summaries = Vec::new();
    for document in serde_yaml::Deserializer::from_str(text) {
        let value = serde_yaml::Value::deserialize(document)?;
        if let Some(summary) = CatalogSummary::from_document(value)? {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

/// Load every `.yaml` / `.yml` file under `dir`, in file-name order.
///
/// Broken input is logged and skipped at the smallest unit possible: an
/// unreadable directory entry or file, or a single malformed document inside
/// a multi-document file. A YAML syntax error ends its file, since nothing
/// after it can be parsed. A missing `dir` is an error.
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<CatalogSummary>, SiteError> {
    if !dir.is_dir() {
        return Err(SiteError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "catalog directory not found"),
        ));
    }

    let mut summaries: Vec<CatalogSummary> = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable catalog entry");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_yaml(path) {
            continue;
        }

        debug!(path = %path.display(), "processing catalog file");
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping catalog file");
                continue;
            }
        };
        for summary in parse_file_documents(path, &text) {
            if summaries.iter().any(|s| s.id == summary.id) {
                warn!(id = %summary.id, path = %path.display(), "duplicate catalog id");
            }
            summaries.push(summary);
        }
    }

    info!(dir = %dir.display(), count = summaries.len(), "catalog loaded");
    Ok(summaries)
}

fn parse_file_documents(path: &Path, text: &str) -> Vec<CatalogSummary> {
    let mut summaries = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let value = match serde_yaml::Value::deserialize(document) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), document = index, error = %e, "skipping rest of catalog file");
                break;
            }
        };
        match CatalogSummary::from_document(value) {
            Ok(Some(summary)) => summaries.push(summary),
            Ok(None) => {}
            Err(e) => {
                warn!(path = %path.display(), document = index, error = %e, "skipping catalog document")
            }
        }
    }
    summaries
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
