//! Primary weight-file selection.

use catalog_types::Engine;

use crate::error::HubError;
use crate::metadata::SiblingFile;

/// The file chosen to represent the model weights, and the engine it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSelection {
    pub engine: Engine,
    pub file: String,
}

struct Rule {
    engine: Engine,
    matches: fn(&str) -> bool,
}

// Strict priority order; the first rule with any matching file wins.
const RULES: [Rule; 3] = [
    Rule {
        engine: Engine::LlamaCpp,
        matches: is_gguf,
    },
    Rule {
        engine: Engine::Vllm,
        matches: is_first_safetensors_shard,
    },
    Rule {
        engine: Engine::Vllm,
        matches: is_safetensors,
    },
];

fn is_gguf(name: &str) -> bool {
    name.ends_with(".gguf")
}

fn is_first_safetensors_shard(name: &str) -> bool {
    is_safetensors(name) && name.contains("-00001-of-")
}

fn is_safetensors(name: &str) -> bool {
    name.ends_with(".safetensors")
}

/// Pick the primary artifact from a repository listing.
///
/// Within a rule, ties go to listing order. That order is whatever the hub
/// returned, so repos with several `.gguf` quantizations resolve to the first
/// one listed.
pub fn select_primary_artifact(files: &[SiblingFile]) -> Result<ArtifactSelection, HubError> {
    RULES
        .iter()
        .find_map(|rule| {
            files
                .iter()
                .find(|f| (rule.matches)(&f.rfilename))
                .map(|f| ArtifactSelection {
                    engine: rule.engine,
                    file: f.rfilename.clone(),
                })
        })
        .ok_or(HubError::NoSupportedArtifact)
}
