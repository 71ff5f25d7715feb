use chrono::{Days, Local, NaiveDate};
use taskdash_core::{Editable, TaskdashResult};

use super::{optional_text, require};
use crate::field_update::FieldUpdate;
use crate::project::ProjectId;
use crate::task::{NewTask, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate};
use crate::team_member::MemberId;
use crate::timestamp::Timestamp;

pub const TASK_SAVE_FAILED: &str = "Failed to save task. Please try again.";

/// Create/edit model for a task.
///
/// `due_date` is the text of the date input (`YYYY-MM-DD`); an empty value
/// is sent as `null`. Status is not edited here: it is preserved from the
/// record being edited, or `TODO` for new tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub editing: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: String,
    pub project_id: Option<ProjectId>,
    pub team_member_id: Option<MemberId>,
}

impl TaskDraft {
    /// Create-mode draft whose due date is the day after `today`.
    pub fn new_for_date(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: tomorrow.format("%Y-%m-%d").to_string(),
            project_id: None,
            team_member_id: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Task"
        } else {
            "Create New Task"
        }
    }

    pub fn validate(&self) -> TaskdashResult<()> {
        require(&self.title, "Title")
    }

    fn due_timestamp(&self) -> Option<Timestamp> {
        optional_text(&self.due_date).map(Timestamp::new)
    }

    pub fn to_new(&self) -> TaskdashResult<NewTask> {
        self.validate()?;
        Ok(NewTask {
            title: self.title.trim().to_string(),
            description: optional_text(&self.description),
            priority: self.priority.clone(),
            status: self.status.clone(),
            due_date: self.due_timestamp(),
            project_id: self.project_id,
            team_member_id: self.team_member_id,
            assigned_to: None,
        })
    }

    /// Full-replacement body: every editable field is sent, cleared ones as
    /// `null`.
    pub fn to_update(&self) -> TaskdashResult<TaskUpdate> {
        self.validate()?;
        Ok(TaskUpdate {
            title: Some(self.title.trim().to_string()),
            description: optional_text(&self.description).into(),
            priority: Some(self.priority.clone()),
            status: Some(self.status.clone()),
            due_date: self.due_timestamp().into(),
            project_id: self.project_id.into(),
            team_member_id: self.team_member_id.into(),
        })
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::new_for_date(Local::now().date_naive())
    }
}

impl Editable<Task> for TaskDraft {
    fn from_entity(task: &Task) -> Self {
        // Unparsed values pass through verbatim.
        let due_date = task
            .due_date
            .as_ref()
            .map(|due| match due.date() {
                Some(date) => date.format("%Y-%m-%d").to_string(),
                None => due.as_str().trim().to_string(),
            })
            .unwrap_or_default();

        Self {
            editing: Some(task.id),
            title: task.title.clone(),
            description: task.description_text().to_string(),
            priority: task.priority.clone(),
            status: task.status.clone(),
            due_date,
            project_id: task.project_id(),
            team_member_id: task.assignee_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let draft = TaskDraft::new_for_date(date(2024, 2, 28));
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.status, TaskStatus::Todo);
        assert_eq!(draft.due_date, "2024-02-29");
        assert!(!draft.is_edit());
        assert_eq!(draft.heading(), "Create New Task");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut draft = TaskDraft::new_for_date(date(2024, 1, 1));
        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());
        assert!(draft.to_new().is_err());
    }

    #[test]
    fn test_to_new_body() {
        let mut draft = TaskDraft::new_for_date(date(2024, 1, 1));
        draft.title = " Write report ".to_string();
        draft.project_id = Some(4);
        draft.due_date.clear();

        let body = serde_json::to_value(draft.to_new().unwrap()).unwrap();
        assert_eq!(body["title"], "Write report");
        assert_eq!(body["priority"], "MEDIUM");
        assert_eq!(body["status"], "TODO");
        assert_eq!(body["projectId"], 4);
        assert!(body["dueDate"].is_null());
        assert!(body["teamMemberId"].is_null());
    }

    #[test]
    fn test_edit_preserves_status_and_references() {
        let task: Task = serde_json::from_value(json!({
            "id": 12,
            "title": "Ship it",
            "priority": "HIGH",
            "status": "IN_PROGRESS",
            "dueDate": "2024-03-15T00:00:00",
            "project": { "id": 2, "name": "Alpha" },
            "teamMember": { "id": 7, "name": "Ada" }
        }))
        .unwrap();

        let draft = TaskDraft::from_entity(&task);
        assert_eq!(draft.editing, Some(12));
        assert_eq!(draft.due_date, "2024-03-15");
        assert_eq!(draft.project_id, Some(2));
        assert_eq!(draft.team_member_id, Some(7));

        let body = serde_json::to_value(draft.to_update().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "Ship it",
                "description": null,
                "priority": "HIGH",
                "status": "IN_PROGRESS",
                "dueDate": "2024-03-15",
                "projectId": 2,
                "teamMemberId": 7
            })
        );
    }

    #[test]
    fn test_edit_keeps_due_date_without_seconds() {
        let task: Task = serde_json::from_value(json!({
            "id": 3,
            "title": "Midnight",
            "dueDate": "2024-03-15T00:00"
        }))
        .unwrap();

        let draft = TaskDraft::from_entity(&task);
        assert_eq!(draft.due_date, "2024-03-15");
        let body = serde_json::to_value(draft.to_update().unwrap()).unwrap();
        assert_eq!(body["dueDate"], "2024-03-15");
    }

    #[test]
    fn test_edit_keeps_unreadable_due_date_verbatim() {
        let task: Task = serde_json::from_value(json!({
            "id": 4,
            "title": "Odd date",
            "dueDate": "15/03/2024"
        }))
        .unwrap();

        let draft = TaskDraft::from_entity(&task);
        assert_eq!(draft.due_date, "15/03/2024");
        let body = serde_json::to_value(draft.to_update().unwrap()).unwrap();
        assert_eq!(body["dueDate"], "15/03/2024");
    }

    #[test]
    fn test_edit_without_due_date_stays_empty() {
        let task: Task =
            serde_json::from_value(json!({ "id": 1, "title": "No date" })).unwrap();
        let draft = TaskDraft::from_entity(&task);
        assert!(draft.due_date.is_empty());
    }
}
