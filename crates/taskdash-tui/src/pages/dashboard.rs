use taskdash_core::{LogEntry, Loggable};
use taskdash_domain::TaskStats;

use crate::clients::Clients;
use crate::pages::log_failure;

/// Aggregate counters from the stats endpoint.
#[derive(Default)]
pub struct DashboardPage {
    pub stats: Option<TaskStats>,
    pub loading: bool,
    logs: Vec<LogEntry>,
}

impl DashboardPage {
    pub async fn load(&mut self, clients: &Clients) {
        self.loading = true;
        match clients.tasks.stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => log_failure(&mut self.logs, "Failed to load stats", &e),
        }
        self.loading = false;
    }
}

impl Loggable for DashboardPage {
    fn add_log(&mut self, entry: LogEntry) {
        crate::pages::push_log(&mut self.logs, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::{clients, MockTasks};
    use taskdash_core::TaskdashError;

    #[tokio::test]
    async fn test_failed_load_keeps_previous_stats() {
        let mut tasks = MockTasks::new();
        let mut calls = 0;
        tasks.expect_stats().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(TaskStats {
                    total: 2,
                    todo: 1,
                    in_progress: 0,
                    completed: 1,
                })
            } else {
                Err(TaskdashError::Connection("refused".to_string()))
            }
        });
        let clients = clients().with_tasks(tasks).build();
        let mut page = DashboardPage::default();

        page.load(&clients).await;
        page.load(&clients).await;

        assert_eq!(page.stats.map(|s| s.total), Some(2));
        assert!(!page.loading);
        assert!(page.last_error().unwrap().message.contains("Failed to load stats"));
    }
}
