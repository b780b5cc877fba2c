//! Search and task filtering over catalog summaries.

use serde::{Deserialize, Serialize};

use crate::summary::CatalogSummary;

/// Browser filter state. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFilter {
    /// Case-insensitive substring of display name, name or task.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact task value.
    #[serde(default)]
    pub task: Option<String>,
}

impl CatalogFilter {
    pub fn new(search: Option<String>, task: Option<String>) -> Self {
        Self { search, task }
    }

    pub fn matches(&self, summary: &CatalogSummary) -> bool {
        let matches_search = match self.search.as_deref().filter(|s| !s.is_empty()) {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                [&summary.display_name, &summary.name, &summary.task]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
        };
        let matches_task = match self.task.as_deref().filter(|t| !t.is_empty()) {
            None => true,
            Some(task) => summary.task == task,
        };
        matches_search && matches_task
    }

    pub fn apply<'a>(&self, summaries: &'a [CatalogSummary]) -> Vec<&'a CatalogSummary> {
        summaries.iter().filter(|s| self.matches(s)).collect()
    }
}

/// One entry of the task drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOption {
    pub value: String,
    pub label: String,
}

/// Distinct tasks present in `summaries`, sorted by value.
pub fn task_options(summaries: &[CatalogSummary]) -> Vec<TaskOption> {
    let mut tasks: Vec<&str> = summaries.iter().map(|s| s.task.as_str()).collect();
    tasks.sort_unstable();
    tasks.dedup();
    tasks
        .into_iter()
        .map(|task| TaskOption {
            value: task.to_owned(),
            label: format_task_name(task),
        })
        .collect()
}

/// `text-generation` → `Text Generation`.
pub fn format_task_name(task: &str) -> String {
    task.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, display_name: &str, task: &str) -> CatalogSummary {
        CatalogSummary {
            id: name.into(),
            name: name.into(),
            display_name: display_name.into(),
            task: task.into(),
            engine: "vllm".into(),
            version: "latest".into(),
            icon_url: None,
            hf_repo_url: None,
            original_yaml: serde_yaml::Value::Null,
        }
    }

    fn catalog() -> Vec<CatalogSummary> {
        vec![
            summary("qwen2-5-7b", "Qwen 2.5 7B", "text-generation"),
            summary("bge-m3", "BGE M3", "text-embedding"),
            summary("bge-reranker", "BGE Reranker", "text-rerank"),
        ]
    }

    fn names(found: Vec<&CatalogSummary>) -> Vec<&str> {
        found.into_iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let catalog = catalog();
        assert_eq!(CatalogFilter::default().apply(&catalog).len(), 3);
        let blank = CatalogFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(blank.apply(&catalog).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_three_fields() {
        let catalog = catalog();
        let by_display = CatalogFilter::new(Some("qwen 2.5".into()), None);
        assert_eq!(names(by_display.apply(&catalog)), ["qwen2-5-7b"]);
        let by_task = CatalogFilter::new(Some("EMBED".into()), None);
        assert_eq!(names(by_task.apply(&catalog)), ["bge-m3"]);
    }

    #[test]
    fn search_and_task_combine() {
        let catalog = catalog();
        let filter = CatalogFilter::new(Some("bge".into()), Some("text-rerank".into()));
        assert_eq!(names(filter.apply(&catalog)), ["bge-reranker"]);
        let exact = CatalogFilter::new(None, Some("text".into()));
        assert!(exact.apply(&catalog).is_empty());
    }

    #[test]
    fn task_options_are_sorted_and_unique() {
        let mut catalog = catalog();
        catalog.push(summary("llama", "Llama", "text-generation"));
        let options = task_options(&catalog);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["text-embedding", "text-generation", "text-rerank"]);
        assert_eq!(options[1].label, "Text Generation");
    }

    #[test]
    fn formats_task_names() {
        assert_eq!(format_task_name("text-to-image"), "Text To Image");
        assert_eq!(format_task_name("asr"), "Asr");
        assert_eq!(format_task_name(""), "");
    }
}
