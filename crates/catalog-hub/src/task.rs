//! Pipeline-tag → task classification.

use catalog_types::Task;

use crate::error::HubError;

/// Hub pipeline tags this crate understands, in the order they are reported
/// back to users. Exact matches only.
pub const PIPELINE_TASKS: [(&str, Task); 5] = [
    ("text-generation", Task::TextGeneration),
    ("feature-extraction", Task::TextEmbedding),
    ("text-embedding", Task::TextEmbedding),
    ("sentence-similarity", Task::TextEmbedding),
    ("text-rerank", Task::TextRerank),
];

/// Map the hub's `pipeline_tag` onto a supported [`Task`].
///
/// An empty tag counts as missing.
pub fn classify_pipeline_tag(pipeline_tag: Option<&str>) -> Result<Task, HubError> {
    let tag = pipeline_tag
        .filter(|t| !t.is_empty())
        .ok_or(HubError::MissingPipelineTag)?;

    PIPELINE_TASKS
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, task)| *task)
        .ok_or_else(|| HubError::UnsupportedPipelineTag { tag: tag.to_owned() })
}

pub(crate) fn supported_pipeline_tags() -> Vec<&'static str> {
    PIPELINE_TASKS.iter().map(|(tag, _)| *tag).collect()
}

pub(crate) fn supported_tasks() -> Vec<&'static str> {
    Task::ALL.into_iter().map(Task::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_known_tag() {
        let cases = [
            ("text-generation", Task::TextGeneration),
            ("feature-extraction", Task::TextEmbedding),
            ("text-embedding", Task::TextEmbedding),
            ("sentence-similarity", Task::TextEmbedding),
            ("text-rerank", Task::TextRerank),
        ];
        for (tag, expected) in cases {
            // Same tag, same answer, every time.
            for _ in 0..3 {
                assert_eq!(classify_pipeline_tag(Some(tag)).unwrap(), expected, "{tag}");
            }
        }
    }

    #[test]
    fn missing_tag() {
        for tag in [None, Some("")] {
            let err = classify_pipeline_tag(tag).unwrap_err();
            assert!(matches!(err, HubError::MissingPipelineTag));
            assert!(err.to_string().contains("pipeline_tag is missing"));
        }
    }

    #[test]
    fn unsupported_tag_lists_supported_ones() {
        let err = classify_pipeline_tag(Some("object-detection")).unwrap_err();
        assert!(matches!(err, HubError::UnsupportedPipelineTag { ref tag } if tag == "object-detection"));
        let msg = err.to_string();
        assert!(msg.contains("\"object-detection\""));
        assert!(msg.contains(
            "text-generation, feature-extraction, text-embedding, sentence-similarity, text-rerank"
        ));
        assert!(msg.contains("[text-generation, text-embedding, text-rerank]"));
    }

    #[test]
    fn no_fuzzy_matching() {
        for tag in ["Text-Generation", "text-generation ", "text2text-generation", "rerank"] {
            assert!(classify_pipeline_tag(Some(tag)).is_err(), "{tag}");
        }
    }
}
