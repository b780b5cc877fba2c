//! YAML export of a selection of catalog entries.

use crate::error::SiteError;
use crate::summary::CatalogSummary;

/// Render the source documents of the entries named by `ids`.
///
/// Entries come out in catalog order, not selection order. One entry is
/// emitted as a bare document; several are joined with `---` lines. An empty
/// selection or an id missing from `summaries` is an error.
pub fn export_selected(summaries: &[CatalogSummary], ids: &[String]) -> Result<String, SiteError> {
    if ids.is_empty() {
        return Err(SiteError::EmptySelection);
    }
    if let Some(missing) = ids.iter().find(|id| !summaries.iter().any(|s| &s.id == *id)) {
        return Err(SiteError::UnknownModel(missing.clone()));
    }

    let documents = summaries
        .iter()
        .filter(|s| ids.contains(&s.id))
        .map(|s| serde_yaml::to_string(&s.original_yaml))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(documents.join("---\n"))
}
