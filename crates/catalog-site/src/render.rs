//! Data files consumed by the browser page.

use crate::error::SiteError;
use crate::summary::CatalogSummary;

pub const DATA_JS: &str = "data.js";
pub const DATA_YAML: &str = "data.yaml";

/// `data.js`: the summaries as a global the page script reads on load.
pub fn render_data_js(summaries: &[CatalogSummary]) -> Result<String, SiteError> {
    let json = serde_json::to_string_pretty(summaries)?;
    Ok(format!(
        "// Auto-generated data file\nwindow.modelCatalogData = {json};"
    ))
}

/// `data.yaml`: every source document, each prefixed with `---`.
pub fn render_yaml_bundle(summaries: &[CatalogSummary]) -> Result<String, SiteError> {
    let documents = summaries
        .iter()
        .map(|s| serde_yaml::to_string(&s.original_yaml).map(|yaml| format!("---\n{yaml}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(documents.join("\n"))
}
