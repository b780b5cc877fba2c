use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Serving engine implied by the primary weight artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Engine {
    /// General-purpose server for safetensors checkpoints.
    Vllm,
    /// Quantized GGUF runtime.
    LlamaCpp,
}

/// The model tasks a catalog entry may declare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Task {
    TextGeneration,
    TextEmbedding,
    TextRerank,
}

impl Task {
    /// Every supported task, in declaration order.
    pub const ALL: [Task; 3] = [Task::TextGeneration, Task::TextEmbedding, Task::TextRerank];

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Request routing strategy used by the Ray serve deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SchedulerKind {
    ConsistentHash,
}
