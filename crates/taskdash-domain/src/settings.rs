//! Locally stored preferences.
//!
//! These records never touch the backend. They are kept as JSON values
//! under fixed keys, apart from the JIRA YAML blob which is stored verbatim.

use serde::{Deserialize, Serialize};

/// Storage keys. The values match the keys older browser builds used, so an
/// exported settings file can be carried over as is.
pub struct SettingsKey;

impl SettingsKey {
    pub const JIRA_YAML: &'static str = "jiraYamlConfig";
    pub const JIRA_FORM: &'static str = "jiraFormConfig";
    pub const GENERAL: &'static str = "generalSettings";
    pub const NOTIFICATIONS: &'static str = "notificationSettings";

    pub const ALL: [&'static str; 4] = [
        Self::JIRA_YAML,
        Self::JIRA_FORM,
        Self::GENERAL,
        Self::NOTIFICATIONS,
    ];
}

pub const DEFAULT_JIRA_YAML: &str = r#"# JIRA Configuration
jira:
  server_url: "https://your-company.atlassian.net"
  username: "your-email@company.com"
  api_token: "your-api-token-here"

  # Project settings
  default_project: "PROJ"
  issue_types:
    - "Task"
    - "Bug"
    - "Story"

  # Field mappings
  field_mappings:
    priority: "priority"
    assignee: "assignee"
    status: "status"

  # Import settings
  import:
    auto_assign: true
    default_priority: "Medium"
    sync_comments: false"#;

pub const THEMES: [&str; 3] = ["light", "dark", "auto"];
pub const LANGUAGES: [&str; 3] = ["en", "es", "fr"];
pub const TIMEZONES: [&str; 3] = ["UTC", "EST", "PST"];
pub const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];
pub const IMPORT_PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

/// Returns the option after `current`, wrapping around. Unknown values
/// restart at the first option.
pub fn cycle_option(options: &[&str], current: &str) -> String {
    let next = options
        .iter()
        .position(|option| *option == current)
        .map_or(0, |i| (i + 1) % options.len());
    options.get(next).copied().unwrap_or(current).to_string()
}

/// Structured JIRA connection form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JiraConnection {
    pub server_url: String,
    pub username: String,
    pub api_token: String,
    pub default_project: String,
    pub auto_assign: bool,
    pub default_priority: String,
}

impl Default for JiraConnection {
    fn default() -> Self {
        Self {
            server_url: "https://your-company.atlassian.net".to_string(),
            username: "your-email@company.com".to_string(),
            api_token: String::new(),
            default_project: "PROJ".to_string(),
            auto_assign: true,
            default_priority: "Medium".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub date_format: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: THEMES[0].to_string(),
            language: LANGUAGES[0].to_string(),
            timezone: TIMEZONES[0].to_string(),
            date_format: DATE_FORMATS[0].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub task_reminders: bool,
    pub project_updates: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            task_reminders: true,
            project_updates: false,
            weekly_reports: true,
        }
    }
}
