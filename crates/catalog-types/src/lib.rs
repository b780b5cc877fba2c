//! Shared types for the model catalog.
//!
//! The [`ModelCatalog`] document is what the converter emits and what the
//! catalog site reads back. [`Engine`] and [`Task`] are closed enums so an
//! unsupported value can never make it into a document; their string forms
//! only exist at the serde / strum boundary.

mod catalog;
pub mod defaults;
mod kinds;

pub use catalog::{
    CatalogMetadata, CatalogSpec, DeploymentOptions, EngineArgs, EngineSpec, ModelCatalog,
    ModelSpec, Replicas, Resources, SchedulerSpec, Variables, VllmEngineArgs, API_VERSION, KIND,
};
pub use kinds::{Engine, SchedulerKind, Task};

/// JSON Schema describing a [`ModelCatalog`] document.
pub fn model_catalog_schema() -> schemars::Schema {
    schemars::schema_for!(ModelCatalog)
}
