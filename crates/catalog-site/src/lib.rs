//! The catalog browser site.
//!
//! A directory of `ModelCatalog` YAML files becomes a list of flattened
//! [`CatalogSummary`] records (`data.js`) plus a concatenated YAML bundle
//! (`data.yaml`). The same records back the search / task filter and the
//! YAML export, both from the terminal and over HTTP via [`server::router`].

pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod render;
pub mod server;
pub mod summary;

pub use builder::SiteBuilder;
pub use config::SiteConfig;
pub use error::SiteError;
pub use export::export_selected;
pub use filter::{format_task_name, task_options, CatalogFilter, TaskOption};
pub use loader::{load_catalog_dir, parse_catalog_str};
pub use render::{render_data_js, render_yaml_bundle, DATA_JS, DATA_YAML};
pub use server::{router, AppState};
pub use summary::CatalogSummary;
