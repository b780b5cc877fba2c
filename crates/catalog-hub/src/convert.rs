//! End-to-end conversion and output rendering.

use catalog_types::ModelCatalog;
use tracing::{debug, info};

use crate::artifact::select_primary_artifact;
use crate::client::MetadataSource;
use crate::error::HubError;
use crate::metadata::RemoteModelMetadata;
use crate::reference::RepoReference;
use crate::synth::synthesize_catalog;
use crate::task::classify_pipeline_tag;

/// Serialization used for the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Parse `url` (on `host`), fetch its metadata from `source` and build the
/// catalog entry. Stops at the first error.
pub async fn convert<S>(source: &S, url: &str, host: &str) -> Result<ModelCatalog, HubError>
where
    S: MetadataSource + ?Sized,
{
    let reference = RepoReference::parse_for_host(url, host)?;
    debug!(%reference, "parsed repository reference");

    let meta = source.model_info(&reference).await?;
    let catalog = catalog_from_metadata(&reference, &meta)?;

    info!(
        name = %catalog.metadata.name,
        engine = %catalog.spec.engine.engine,
        task = %catalog.spec.model.task,
        file = %catalog.spec.model.file,
        "catalog entry synthesized"
    );
    Ok(catalog)
}

/// The pure half of [`convert`]: artifact selection, then task
/// classification, then synthesis.
pub fn catalog_from_metadata(
    reference: &RepoReference,
    meta: &RemoteModelMetadata,
) -> Result<ModelCatalog, HubError> {
    let artifact = select_primary_artifact(&meta.siblings)?;
    debug!(engine = %artifact.engine, file = %artifact.file, "selected primary artifact");

    let task = classify_pipeline_tag(meta.pipeline_tag.as_deref())?;
    debug!(%task, "classified pipeline tag");

    Ok(synthesize_catalog(reference, artifact, task))
}

/// Serialize `catalog` as YAML or pretty-printed JSON.
pub fn render(catalog: &ModelCatalog, format: OutputFormat) -> Result<String, HubError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(catalog)?,
        OutputFormat::Json => serde_json::to_string_pretty(catalog)?,
    })
}
