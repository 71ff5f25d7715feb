use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskdash_core::{TaskdashError, TaskdashResult};

use crate::field_update::FieldUpdate;
use crate::project::ProjectId;
use crate::team_member::MemberId;
use crate::timestamp::Timestamp;

pub type TaskId = i64;

pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Task priority as sent by the backend.
///
/// Values the client does not know are kept in `Other` so they survive a
/// round trip and render in the default style bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Other(raw) => raw,
        }
    }

    /// Strict, case-insensitive parse used for user input.
    pub fn parse(input: &str) -> TaskdashResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TaskdashError::Validation(format!(
                "Invalid priority '{}'. Expected one of: low, medium, high",
                other
            ))),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Cycles through the known values; used by select-style form controls.
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High | Self::Other(_) => Self::Low,
        }
    }
}

impl From<String> for TaskPriority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            _ => Self::Other(raw),
        }
    }
}

impl From<TaskPriority> for String {
    fn from(priority: TaskPriority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status as sent by the backend. See [`TaskPriority`] for `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Other(raw) => raw,
        }
    }

    /// Group heading: the raw value with the underscore replaced by a space.
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(raw) => raw,
        }
    }

    /// Strict, case-insensitive parse used for user input. Accepts
    /// `in_progress`, `in-progress`, `in progress` and `inprogress`.
    pub fn parse(input: &str) -> TaskdashResult<Self> {
        let normalized: String = input
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(TaskdashError::Validation(format!(
                "Invalid status '{}'. Expected one of: todo, in_progress, completed",
                input.trim()
            ))),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed | Self::Other(_) => Self::Todo,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "TODO" => Self::Todo,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Embedded project reference on a task. The backend may embed the whole
/// project; only the id and name are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
}

/// Embedded team member reference on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    /// Free-text assignee from older records and ticket imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub team_member: Option<MemberRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<MemberId>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

impl Task {
    /// Project the task belongs to, whether embedded or sent as a bare id.
    pub fn project_id(&self) -> Option<ProjectId> {
        self.project.as_ref().map(|p| p.id).or(self.project_id)
    }

    /// Assigned team member id, whether embedded or sent as a bare id.
    pub fn assignee_id(&self) -> Option<MemberId> {
        self.team_member.as_ref().map(|m| m.id).or(self.team_member_id)
    }

    /// Name shown for the assignee: the team member, then the legacy
    /// free-text label. `None` when the task is unassigned.
    pub fn assignee_name(&self) -> Option<&str> {
        self.team_member
            .as_ref()
            .map(|m| m.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                self.assigned_to
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
            })
    }

    pub fn assignee_label(&self) -> &str {
        self.assignee_name().unwrap_or(UNASSIGNED_LABEL)
    }

    /// True when the due date has passed and the task has no completion
    /// timestamp. A due date equal to `now` is not overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        let due = match self.due_date.as_ref().and_then(Timestamp::parse) {
            Some(due) => due,
            None => return false,
        };
        due < now && self.completed_at.as_ref().map_or(true, |done| done.is_empty())
    }

    /// Date shown on cards: the due date, or the creation date without one.
    pub fn display_date(&self) -> String {
        self.due_date
            .as_ref()
            .filter(|due| !due.is_empty())
            .unwrap_or(&self.created_at)
            .date_label()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body of `POST /tasks`. Server-assigned fields are absent by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub team_member_id: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: None,
            project_id: None,
            team_member_id: None,
            assigned_to: None,
        }
    }
}

/// Body of `PUT /tasks/{id}` and `PATCH /tasks/{id}`.
///
/// Fields left at `None` / `NoChange` are omitted from the JSON body;
/// `FieldUpdate::Clear` is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub description: FieldUpdate<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub due_date: FieldUpdate<Timestamp>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub project_id: FieldUpdate<ProjectId>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub team_member_id: FieldUpdate<MemberId>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && !self.description.is_change()
            && self.priority.is_none()
            && self.status.is_none()
            && !self.due_date.is_change()
            && !self.project_id.is_change()
            && !self.team_member_id.is_change()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_task() -> Task {
        serde_json::from_value(json!({
            "id": 7,
            "title": "Write release notes",
            "priority": "HIGH",
            "status": "TODO",
            "createdAt": "2024-05-01T09:00:00",
            "updatedAt": "2024-05-01T09:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_minimal_task() {
        let task = sample_task();
        assert_eq!(task.id, 7);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.assignee_label(), UNASSIGNED_LABEL);
    }

    #[test]
    fn test_deserialize_embedded_references() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Ship",
            "priority": "LOW",
            "status": "IN_PROGRESS",
            "project": { "id": 3, "name": "Alpha", "createdAt": "2024-01-01", "tasks": [] },
            "teamMember": { "id": 9, "name": "Ada Lovelace", "email": "ada@example.com" }
        }))
        .unwrap();

        assert_eq!(task.project_id(), Some(3));
        assert_eq!(task.assignee_id(), Some(9));
        assert_eq!(task.assignee_label(), "Ada Lovelace");
    }

    #[test]
    fn test_legacy_assignee_label() {
        let mut task = sample_task();
        task.assigned_to = Some("Imported from JIRA".to_string());
        assert_eq!(task.assignee_label(), "Imported from JIRA");

        task.team_member = Some(MemberRef {
            id: 2,
            name: "Grace".to_string(),
        });
        assert_eq!(task.assignee_label(), "Grace");
    }

    #[test]
    fn test_unknown_enum_values_round_trip() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Odd",
            "priority": "URGENT",
            "status": "BLOCKED"
        }))
        .unwrap();

        assert_eq!(task.priority, TaskPriority::Other("URGENT".to_string()));
        assert!(!task.status.is_known());

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["priority"], "URGENT");
        assert_eq!(value["status"], "BLOCKED");
    }

    #[test]
    fn test_status_parse_variants() {
        assert_eq!(TaskStatus::parse("in_progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("In Progress").unwrap(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("TODO").unwrap(), TaskStatus::Todo);
        assert_eq!(TaskStatus::parse("done").unwrap(), TaskStatus::Completed);
        assert!(TaskStatus::parse("blocked").is_err());
        assert!(TaskPriority::parse("critical").is_err());
        assert_eq!(TaskPriority::parse(" High ").unwrap(), TaskPriority::High);
    }

    #[test]
    fn test_status_label_replaces_underscore() {
        assert_eq!(TaskStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(TaskStatus::Todo.label(), "TODO");
    }

    #[test]
    fn test_overdue_boundaries() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let mut task = sample_task();

        assert!(!task.is_overdue(now));

        task.due_date = Some(Timestamp::new("2024-06-10T12:00:00Z"));
        assert!(!task.is_overdue(now), "due exactly now is not overdue");

        task.due_date = Some(Timestamp::new("2024-06-10T11:59:59Z"));
        assert!(task.is_overdue(now));

        task.completed_at = Some(Timestamp::new("2024-06-10T08:00:00Z"));
        assert!(!task.is_overdue(now));

        task.completed_at = None;
        task.due_date = Some(Timestamp::new("not a date"));
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn test_overdue_without_seconds_in_due_date() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut task = sample_task();
        task.due_date = Some(Timestamp::new("2024-03-15T00:00"));
        assert!(task.is_overdue(now));
    }

    #[test]
    fn test_display_date_falls_back_to_created() {
        let mut task = sample_task();
        assert_eq!(task.display_date(), "2024-05-01");
        task.due_date = Some(Timestamp::new("2024-07-04"));
        assert_eq!(task.display_date(), "2024-07-04");
    }

    #[test]
    fn test_new_task_body_excludes_server_fields() {
        let body = serde_json::to_value(NewTask::new("Write release notes")).unwrap();
        assert_eq!(body["title"], "Write release notes");
        assert_eq!(body["priority"], "MEDIUM");
        assert_eq!(body["status"], "TODO");
        assert!(body["dueDate"].is_null());
        assert!(body.get("id").is_none());
        assert!(body.get("createdAt").is_none());
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_update_body_omits_unchanged_fields() {
        let update = TaskUpdate {
            status: Some(TaskStatus::Completed),
            due_date: FieldUpdate::Clear,
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({ "status": "COMPLETED", "dueDate": null }));
        assert!(!update.is_empty());
        assert!(TaskUpdate::default().is_empty());
    }
}
