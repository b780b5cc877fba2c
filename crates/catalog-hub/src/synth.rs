//! Catalog document assembly.

use catalog_types::defaults::{
    DEFAULT_REPLICAS, DEFAULT_SCHEDULER, ENGINE_VERSION, MODEL_VERSION,
};
use catalog_types::{
    CatalogMetadata, CatalogSpec, DeploymentOptions, Engine, EngineArgs, EngineSpec, ModelCatalog,
    ModelSpec, Resources, Task, Variables,
};

use crate::artifact::ArtifactSelection;
use crate::reference::RepoReference;

/// Lowercase `name`, collapse every run of non `[a-z0-9]` characters into a
/// single `-`, and trim hyphens from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_owned()
}

/// Build the catalog entry for `reference`. Pure; cannot fail.
pub fn synthesize_catalog(
    reference: &RepoReference,
    artifact: ArtifactSelection,
    task: Task,
) -> ModelCatalog {
    let full_name = reference.full_name();

    let engine_args = match artifact.engine {
        Engine::Vllm => Some(EngineArgs::vllm(full_name.clone())),
        Engine::LlamaCpp => None,
    };

    ModelCatalog::new(
        CatalogMetadata::named(slugify(&reference.repo)),
        CatalogSpec {
            model: ModelSpec {
                registry: String::new(),
                name: full_name,
                file: artifact.file,
                version: MODEL_VERSION.to_owned(),
                task,
            },
            engine: EngineSpec {
                engine: artifact.engine,
                version: ENGINE_VERSION.to_owned(),
            },
            resources: Resources::default(),
            replicas: DEFAULT_REPLICAS,
            deployment_options: DeploymentOptions {
                scheduler: DEFAULT_SCHEDULER,
            },
            variables: Variables {
                ray_scheduler_type: DEFAULT_SCHEDULER.kind,
                engine_args,
            },
        },
    )
}
