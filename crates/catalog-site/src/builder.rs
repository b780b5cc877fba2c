use std::path::PathBuf;

use tracing::info;

use crate::error::SiteError;
use crate::loader::load_catalog_dir;
use crate::render::{render_data_js, render_yaml_bundle, DATA_JS, DATA_YAML};
use crate::summary::CatalogSummary;

/// Generates the browser data files from a catalog directory.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    catalog_dir: PathBuf,
    out_dir: PathBuf,
}

impl SiteBuilder {
    pub fn new(catalog_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Load the catalog, write `data.js` and `data.yaml` into the output
    /// directory (creating it if needed) and return the summaries written.
    pub fn build(&self) -> Result<Vec<CatalogSummary>, SiteError> {
        let summaries = load_catalog_dir(&self.catalog_dir)?;

        std::fs::create_dir_all(&self.out_dir).map_err(|e| SiteError::io(&self.out_dir, e))?;
        self.write(DATA_JS, render_data_js(&summaries)?)?;
        self.write(DATA_YAML, render_yaml_bundle(&summaries)?)?;

        info!(
            out_dir = %self.out_dir.display(),
            models = summaries.len(),
            "site data generated"
        );
        Ok(summaries)
    }

    fn write(&self, file: &str, contents: String) -> Result<(), SiteError> {
        let path = self.out_dir.join(file);
        std::fs::write(&path, contents).map_err(|e| SiteError::io(path, e))
    }
}
