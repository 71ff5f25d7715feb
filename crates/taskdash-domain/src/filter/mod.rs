//! Task filtering.
//!
//! Each filter is a pure predicate over a single task, so any combination
//! gives the same result regardless of the order it is applied in.

use crate::task::{Task, TaskPriority, TaskStatus};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks by status. `None` matches every task.
pub struct StatusFilter {
    status: Option<TaskStatus>,
}

impl StatusFilter {
    pub fn new(status: Option<TaskStatus>) -> Self {
        Self { status }
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        self.status.as_ref().map_or(true, |status| status == &task.status)
    }
}

/// Filter tasks by priority. `None` matches every task.
pub struct PriorityFilter {
    priority: Option<TaskPriority>,
}

impl PriorityFilter {
    pub fn new(priority: Option<TaskPriority>) -> Self {
        Self { priority }
    }
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        self.priority
            .as_ref()
            .map_or(true, |priority| priority == &task.priority)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::TextSearcher;
    use serde_json::json;

    fn tasks() -> Vec<Task> {
        serde_json::from_value(json!([
            { "id": 1, "title": "Fix login bug", "priority": "HIGH", "status": "TODO" },
            { "id": 2, "title": "Write docs", "description": "API bug list", "priority": "LOW", "status": "TODO" },
            { "id": 3, "title": "Release", "priority": "HIGH", "status": "COMPLETED" },
            { "id": 4, "title": "Bugfix sprint", "priority": "MEDIUM", "status": "IN_PROGRESS" }
        ]))
        .unwrap()
    }

    fn matching_ids(filter: &dyn TaskFilter, tasks: &[Task]) -> Vec<i64> {
        tasks.iter().filter(|t| filter.matches(t)).map(|t| t.id).collect()
    }

    #[test]
    fn test_status_filter() {
        let tasks = tasks();
        let filter = StatusFilter::new(Some(TaskStatus::Todo));
        assert_eq!(matching_ids(&filter, &tasks), vec![1, 2]);
        assert_eq!(matching_ids(&StatusFilter::new(None), &tasks).len(), 4);
    }

    #[test]
    fn test_priority_filter() {
        let tasks = tasks();
        let filter = PriorityFilter::new(Some(TaskPriority::High));
        assert_eq!(matching_ids(&filter, &tasks), vec![1, 3]);
    }

    #[test]
    fn test_empty_composite_matches_all() {
        let tasks = tasks();
        let filter = CompositeFilter::new();
        assert!(filter.is_empty());
        assert_eq!(matching_ids(&filter, &tasks).len(), 4);
    }

    #[test]
    fn test_filters_commute() {
        let tasks = tasks();

        let forward = CompositeFilter::new()
            .with_filter(Box::new(StatusFilter::new(Some(TaskStatus::Todo))))
            .with_filter(Box::new(PriorityFilter::new(Some(TaskPriority::High))))
            .with_filter(Box::new(TextSearcher::new("bug")));
        let reverse = CompositeFilter::new()
            .with_filter(Box::new(TextSearcher::new("bug")))
            .with_filter(Box::new(PriorityFilter::new(Some(TaskPriority::High))))
            .with_filter(Box::new(StatusFilter::new(Some(TaskStatus::Todo))));

        assert_eq!(matching_ids(&forward, &tasks), vec![1]);
        assert_eq!(matching_ids(&forward, &tasks), matching_ids(&reverse, &tasks));
    }
}
