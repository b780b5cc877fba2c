//! Fixed defaults stamped into every synthesized catalog entry.

use crate::catalog::{Replicas, SchedulerSpec, VllmEngineArgs};
use crate::kinds::SchedulerKind;

/// Model version recorded for hub-derived entries.
pub const MODEL_VERSION: &str = "latest";

/// Engine API version recorded for hub-derived entries.
pub const ENGINE_VERSION: &str = "v1";

pub const DEFAULT_REPLICAS: Replicas = Replicas { num: 1 };

pub const DEFAULT_SCHEDULER: SchedulerSpec = SchedulerSpec {
    kind: SchedulerKind::ConsistentHash,
    virtual_nodes: 150,
    load_factor: 1.25,
};

/// vLLM arguments applied to every safetensors model. Tune globally here.
pub const DEFAULT_VLLM_ARGS: VllmEngineArgs = VllmEngineArgs {
    tensor_parallel_size: 1,
    max_model_len: 32768,
    enforce_eager: true,
    gpu_memory_utilization: 0.95,
    enable_chunked_prefill: true,
};
