//! Derived list views.
//!
//! Pure functions from a loaded collection plus UI selections to the
//! subset and order that gets rendered. The loaded collection is never
//! modified, so clearing a filter restores the full list without a refetch.

use crate::filter::{CompositeFilter, PriorityFilter, StatusFilter, TaskFilter};
use crate::group::{group_tasks, GroupBy, TaskGroup};
use crate::project::{Project, ProjectId};
use crate::search::TextSearcher;
use crate::sort::ProjectSort;
use crate::task::{Task, TaskId, TaskPriority, TaskStatus};

/// Filter selections on the Tasks page. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub search: String,
}

impl TaskFilters {
    pub fn has_active_filters(&self) -> bool {
        self.status.is_some() || self.priority.is_some() || !self.search.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_filter(&self) -> CompositeFilter {
        CompositeFilter::new()
            .with_filter(Box::new(StatusFilter::new(self.status.clone())))
            .with_filter(Box::new(PriorityFilter::new(self.priority.clone())))
            .with_filter(Box::new(TextSearcher::new(self.search.clone())))
    }
}

/// Visible subset of the loaded tasks, in source order, and its grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskProjection {
    pub filtered: Vec<TaskId>,
    pub groups: Vec<TaskGroup>,
}

impl TaskProjection {
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// "{visible} of {total} tasks" heading.
    pub fn count_label(&self, total: usize) -> String {
        format!("{} of {} tasks", self.filtered.len(), total)
    }

    /// Resolves the visible ids against the collection they were built from.
    pub fn resolve<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        resolve_ids(&self.filtered, tasks)
    }
}

pub fn resolve_ids<'a>(ids: &[TaskId], tasks: &'a [Task]) -> Vec<&'a Task> {
    ids.iter()
        .filter_map(|id| tasks.iter().find(|t| t.id == *id))
        .collect()
}

pub fn project_tasks(tasks: &[Task], filters: &TaskFilters, group_by: GroupBy) -> TaskProjection {
    let filter = filters.to_filter();
    let visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    let groups = group_tasks(visible.iter().copied(), group_by);

    TaskProjection {
        filtered: visible.iter().map(|t| t.id).collect(),
        groups,
    }
}

/// Search and sort selections on the Projects page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub search: String,
    pub sort: ProjectSort,
}

/// Returns project ids that match the search, in sort order.
pub fn filter_and_sort_projects(projects: &[Project], query: &ProjectQuery) -> Vec<ProjectId> {
    let searcher = TextSearcher::new(query.search.as_str());
    let mut visible: Vec<&Project> = projects.iter().filter(|p| searcher.matches(*p)).collect();
    query.sort.sort(&mut visible);
    visible.iter().map(|p| p.id).collect()
}
