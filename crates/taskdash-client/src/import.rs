//! Ticket import.
//!
//! The dashboard can turn an issue-tracker ticket into a new task. Only a
//! stub provider exists: it fabricates the ticket locally and never opens a
//! connection.

use async_trait::async_trait;
use std::time::Duration;
use taskdash_core::{AppConfig, TaskdashError, TaskdashResult};
use taskdash_domain::{JiraConnection, NewTask, TaskPriority, TaskStatus};

pub const IMPORTED_ASSIGNEE: &str = "Imported from JIRA";

#[async_trait]
pub trait TicketImportProvider: Send + Sync {
    /// Builds the task body for `ticket_id`. The caller creates the task.
    async fn fetch_ticket(&self, ticket_id: &str) -> TaskdashResult<NewTask>;

    async fn test_connection(&self, connection: &JiraConnection) -> TaskdashResult<()>;
}

#[derive(Debug, Clone)]
pub struct JiraStubProvider {
    delay: Duration,
}

impl JiraStubProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_millis(config.effective_import_delay_ms()))
    }
}

impl Default for JiraStubProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            taskdash_core::config::DEFAULT_IMPORT_DELAY_MS,
        ))
    }
}

#[async_trait]
impl TicketImportProvider for JiraStubProvider {
    async fn fetch_ticket(&self, ticket_id: &str) -> TaskdashResult<NewTask> {
        let ticket_id = ticket_id.trim();
        if ticket_id.is_empty() {
            return Err(TaskdashError::Validation("Ticket id is required".to_string()));
        }
        tracing::info!("Synthesizing stub import for ticket {}", ticket_id);

        Ok(NewTask {
            title: format!("[{}] Sample JIRA ticket", ticket_id.to_uppercase()),
            description: Some(format!(
                "This is a test import of JIRA ticket {}. Configure JIRA credentials in Team page for real imports.",
                ticket_id
            )),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: None,
            project_id: None,
            team_member_id: None,
            assigned_to: Some(IMPORTED_ASSIGNEE.to_string()),
        })
    }

    async fn test_connection(&self, connection: &JiraConnection) -> TaskdashResult<()> {
        tracing::info!("Testing JIRA connection to {}", connection.server_url);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_ticket_builds_stub_task() {
        let provider = JiraStubProvider::new(Duration::ZERO);
        let task = provider.fetch_ticket("proj-123").await.unwrap();

        assert_eq!(task.title, "[PROJ-123] Sample JIRA ticket");
        assert!(task.description.as_deref().unwrap().contains("proj-123"));
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.assigned_to.as_deref(), Some(IMPORTED_ASSIGNEE));
        assert!(task.due_date.is_none());
    }

    #[tokio::test]
    async fn test_blank_ticket_id_is_rejected() {
        let provider = JiraStubProvider::new(Duration::ZERO);
        let err = provider.fetch_ticket("   ").await.unwrap_err();
        assert!(matches!(err, TaskdashError::Validation(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connection_waits_for_delay() {
        let provider = JiraStubProvider::default();
        let started = tokio::time::Instant::now();
        provider
            .test_connection(&JiraConnection::default())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
