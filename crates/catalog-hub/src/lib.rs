//! Turn a Hugging Face model repository into a `ModelCatalog` entry.
//!
//! The pipeline is linear: [`RepoReference::parse`] → [`MetadataSource::model_info`]
//! → [`select_primary_artifact`] → [`classify_pipeline_tag`] →
//! [`synthesize_catalog`]. Only the fetch step does I/O; everything after it is
//! pure and can be driven from fixture metadata. [`convert`] runs the whole
//! thing and [`render`] serializes the result.

pub mod artifact;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod metadata;
pub mod reference;
pub mod synth;
pub mod task;

pub use artifact::{select_primary_artifact, ArtifactSelection};
pub use client::{HubClient, MetadataSource};
pub use config::HubConfig;
pub use convert::{catalog_from_metadata, convert, render, OutputFormat};
pub use error::HubError;
pub use metadata::{RemoteModelMetadata, SiblingFile};
pub use reference::RepoReference;
pub use synth::{slugify, synthesize_catalog};
pub use task::{classify_pipeline_tag, PIPELINE_TASKS};
