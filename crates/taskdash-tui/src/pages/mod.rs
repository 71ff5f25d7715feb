//! Page shells.
//!
//! Each page owns its loaded collections, view selections, open modal and
//! loading flag. Every mutation is followed by a reload of the affected
//! collection; nothing is patched locally.

pub mod dashboard;
pub mod forms;
pub mod projects;
pub mod settings;
pub mod tasks;
pub mod team;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::DashboardPage;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
pub use tasks::TasksPage;
pub use team::TeamPage;

use taskdash_core::{LogEntry, TaskdashError};

const MAX_LOG_ENTRIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Tasks,
    Projects,
    Team,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Tasks,
        Page::Projects,
        Page::Team,
        Page::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Tasks => "Tasks",
            Page::Projects => "Projects",
            Page::Team => "Team",
            Page::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_shortcut(c: char) -> Option<Page> {
        let index = c.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Records a failed call in the tracing log and the page console.
pub(crate) fn log_failure(logs: &mut Vec<LogEntry>, context: &str, err: &TaskdashError) {
    tracing::error!("{}: {}", context, err);
    push_log(logs, LogEntry::error(format!("{}: {}", context, err)));
}

pub(crate) fn push_log(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let overflow = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shortcuts() {
        assert_eq!(Page::from_shortcut('1'), Some(Page::Dashboard));
        assert_eq!(Page::from_shortcut('5'), Some(Page::Settings));
        assert_eq!(Page::from_shortcut('0'), None);
        assert_eq!(Page::from_shortcut('9'), None);
        assert_eq!(Page::Settings.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Settings);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut logs = Vec::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            push_log(&mut logs, LogEntry::info(format!("entry {i}")));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }
}
