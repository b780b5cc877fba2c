//! The `ModelCatalog` document.
//!
//! Field order here is the order keys are emitted in, so keep it in sync with
//! the layout consumers expect (`apiVersion`, `kind`, `metadata`, `spec`).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_VLLM_ARGS;
use crate::kinds::{Engine, SchedulerKind, Task};

pub const API_VERSION: &str = "v1";
pub const KIND: &str = "ModelCatalog";

/// A complete catalog entry describing how to deploy one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalog {
    pub api_version: String,
    pub kind: String,
    pub metadata: CatalogMetadata,
    pub spec: CatalogSpec,
}

impl ModelCatalog {
    /// Wrap `metadata` and `spec` with the current `apiVersion` / `kind`.
    pub fn new(metadata: CatalogMetadata, spec: CatalogSpec) -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            kind: KIND.to_owned(),
            metadata,
            spec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogMetadata {
    /// URL-safe identifier of the entry.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Left unset by the converter; filled in by whoever imports the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl CatalogMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSpec {
    pub model: ModelSpec,
    pub engine: EngineSpec,
    #[serde(default)]
    pub resources: Resources,
    pub replicas: Replicas,
    pub deployment_options: DeploymentOptions,
    pub variables: Variables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelSpec {
    /// Registry the weights are pulled from; empty means "resolve at import".
    pub registry: String,
    /// `<owner>/<repo>` exactly as it appears on the hub.
    pub name: String,
    pub file: String,
    pub version: String,
    pub task: Task,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EngineSpec {
    pub engine: Engine,
    pub version: String,
}

/// Resource requests. Everything is optional and the converter leaves it
/// empty, which serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<BTreeMap<String, String>>,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none() && self.gpu.is_none() && self.memory.is_none() && self.accelerator.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Replicas {
    pub num: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeploymentOptions {
    pub scheduler: SchedulerSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchedulerSpec {
    #[serde(rename = "type")]
    pub kind: SchedulerKind,
    pub virtual_nodes: u32,
    pub load_factor: f64,
}

/// Runtime variables handed to the serving process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Variables {
    #[serde(rename = "RAY_SCHEDULER_TYPE")]
    pub ray_scheduler_type: SchedulerKind,
    /// Only present for vLLM; the key is omitted entirely otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_args: Option<EngineArgs>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VllmEngineArgs {
    pub tensor_parallel_size: u32,
    pub max_model_len: u32,
    pub enforce_eager: bool,
    pub gpu_memory_utilization: f64,
    pub enable_chunked_prefill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngineArgs {
    #[serde(flatten)]
    pub vllm: VllmEngineArgs,
    pub served_model_name: String,
}

impl EngineArgs {
    /// The default vLLM argument set, serving the model under `served_model_name`.
    pub fn vllm(served_model_name: impl Into<String>) -> Self {
        Self {
            vllm: DEFAULT_VLLM_ARGS,
            served_model_name: served_model_name.into(),
        }
    }
}
