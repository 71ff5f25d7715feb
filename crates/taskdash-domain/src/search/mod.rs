//! Free-text search over tasks and projects.
//!
//! Matching is a case-insensitive substring test. An empty query matches
//! everything.

use crate::filter::TaskFilter;
use crate::project::Project;
use crate::task::Task;

/// Records that expose text fields to the search box.
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Searchable for Task {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, self.description_text()]
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, self.description_text()]
    }
}

pub struct TextSearcher {
    query: String,
}

impl TextSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches<S: Searchable + ?Sized>(&self, record: &S) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }
}

impl TaskFilter for TextSearcher {
    fn matches(&self, task: &Task) -> bool {
        TextSearcher::matches(self, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_or_description_case_insensitive() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Quarterly report",
            "description": "Includes the BUG triage numbers"
        }))
        .unwrap();

        assert!(TextSearcher::new("quarterly").matches(&task));
        assert!(TextSearcher::new("bug").matches(&task));
        assert!(!TextSearcher::new("release").matches(&task));
        assert!(TextSearcher::new("").matches(&task));
    }

    #[test]
    fn test_missing_description_is_empty() {
        let project: Project =
            serde_json::from_value(json!({ "id": 1, "name": "Alpha" })).unwrap();
        assert!(TextSearcher::new("alp").matches(&project));
        assert!(!TextSearcher::new("beta").matches(&project));
    }
}
