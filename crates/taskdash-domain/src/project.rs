use serde::{Deserialize, Serialize};

use crate::field_update::FieldUpdate;
use crate::format::{initials, percent};
use crate::task::{Task, TaskStatus};
use crate::timestamp::Timestamp;

pub type ProjectId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Timestamp,
    /// Tasks the backend reports for this project. Display only: task
    /// membership is changed through the task's project reference.
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

impl Project {
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_deref().unwrap_or(&[])
    }

    pub fn task_count(&self) -> usize {
        self.tasks().len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks()
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count()
    }

    pub fn completion_percent(&self) -> u8 {
        percent(self.completed_count(), self.task_count())
    }

    pub fn initials(&self) -> String {
        initials(&self.name, Some(2))
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PATCH /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub description: FieldUpdate<String>,
}
