//! Grouping of a filtered task list into labeled buckets.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

pub const ALL_TASKS_LABEL: &str = "All Tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    None,
    Status,
    Priority,
    #[default]
    Assignee,
}

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [Self::None, Self::Status, Self::Priority, Self::Assignee];

    /// Bucket label for a task under this grouping.
    pub fn key_for(&self, task: &Task) -> String {
        match self {
            Self::None => ALL_TASKS_LABEL.to_string(),
            Self::Status => task.status.label(),
            Self::Priority => task.priority.as_str().to_string(),
            Self::Assignee => task.assignee_label().to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No Grouping",
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::Assignee => "Assignee",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::None => Self::Status,
            Self::Status => Self::Priority,
            Self::Priority => Self::Assignee,
            Self::Assignee => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub label: String,
    pub task_ids: Vec<TaskId>,
}

/// Buckets `tasks` by `group_by`. Buckets appear in the order their first
/// task was seen; tasks keep their input order within a bucket.
pub fn group_tasks<'a, I>(tasks: I, group_by: GroupBy) -> Vec<TaskGroup>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: Vec<TaskGroup> = Vec::new();
    for task in tasks {
        let label = group_by.key_for(task);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.task_ids.push(task.id),
            None => groups.push(TaskGroup {
                label,
                task_ids: vec![task.id],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tasks() -> Vec<Task> {
        serde_json::from_value(json!([
            { "id": 1, "title": "a", "priority": "HIGH", "status": "IN_PROGRESS",
              "teamMember": { "id": 5, "name": "Grace" } },
            { "id": 2, "title": "b", "priority": "LOW", "status": "TODO" },
            { "id": 3, "title": "c", "priority": "HIGH", "status": "TODO",
              "assignedTo": "Imported from JIRA" },
            { "id": 4, "title": "d", "priority": "URGENT", "status": "IN_PROGRESS",
              "teamMember": { "id": 5, "name": "Grace" } }
        ]))
        .unwrap()
    }

    fn labels(groups: &[TaskGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.label.as_str()).collect()
    }

    #[test]
    fn test_group_by_status_uses_first_seen_order() {
        let groups = group_tasks(&tasks(), GroupBy::Status);
        assert_eq!(labels(&groups), ["IN PROGRESS", "TODO"]);
        assert_eq!(groups[0].task_ids, vec![1, 4]);
        assert_eq!(groups[1].task_ids, vec![2, 3]);
    }

    #[test]
    fn test_group_by_assignee() {
        let groups = group_tasks(&tasks(), GroupBy::Assignee);
        assert_eq!(labels(&groups), ["Grace", "Unassigned", "Imported from JIRA"]);
    }

    #[test]
    fn test_group_none_is_single_bucket() {
        let groups = group_tasks(&tasks(), GroupBy::None);
        assert_eq!(labels(&groups), [ALL_TASKS_LABEL]);
        assert_eq!(groups[0].task_ids.len(), 4);
    }

    #[test]
    fn test_grouping_partitions_input() {
        let tasks = tasks();
        for group_by in GroupBy::ALL {
            let groups = group_tasks(&tasks, group_by);
            let mut ids: Vec<i64> = groups.iter().flat_map(|g| g.task_ids.clone()).collect();
            ids.sort();
            assert_eq!(ids, vec![1, 2, 3, 4], "{group_by:?}");
        }
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        let none: Vec<Task> = Vec::new();
        assert!(group_tasks(&none, GroupBy::None).is_empty());
    }
}
