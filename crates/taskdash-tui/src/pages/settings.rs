//! Local preferences: JIRA connection (form or raw YAML), general display
//! options and notification toggles. Values are read once when the page
//! opens and written only when a tab is saved.

use crossterm::event::KeyCode;
use taskdash_core::{InputState, LogEntry, Loggable, TaskdashResult};
use taskdash_domain::settings::{
    cycle_option, DATE_FORMATS, IMPORT_PRIORITIES, LANGUAGES, THEMES, TIMEZONES,
};
use taskdash_domain::{
    GeneralSettings, JiraConnection, NotificationSettings, SettingsKey, DEFAULT_JIRA_YAML,
};

use crate::clients::Clients;
use crate::components::Banner;
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::pages::{log_failure, push_log};

pub const YAML_SAVED: &str = "YAML configuration saved successfully!";
pub const JIRA_SAVED: &str = "JIRA configuration saved successfully!";
pub const GENERAL_SAVED: &str = "General settings saved successfully!";
pub const NOTIFICATIONS_SAVED: &str = "Notification settings saved successfully!";
pub const CONNECTION_OK: &str = "JIRA connection successful!";
pub const CONNECTION_FAILED: &str = "JIRA connection failed. Please check your credentials.";
pub const SAVE_FAILED: &str = "Failed to save settings. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Jira,
    General,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [Self::Jira, Self::General, Self::Notifications];

    pub fn title(self) -> &'static str {
        match self {
            Self::Jira => "JIRA",
            Self::General => "General",
            Self::Notifications => "Notifications",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How the JIRA connection is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JiraMode {
    #[default]
    Form,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text,
    Secret,
    Toggle,
    Choice,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingField {
    pub label: &'static str,
    pub kind: SettingKind,
}

const fn field(label: &'static str, kind: SettingKind) -> SettingField {
    SettingField { label, kind }
}

const JIRA_FIELDS: [SettingField; 6] = [
    field("JIRA Server URL", SettingKind::Text),
    field("Username/Email", SettingKind::Text),
    field("API Token", SettingKind::Secret),
    field("Default Project Key", SettingKind::Text),
    field("Auto-assign imported tickets", SettingKind::Toggle),
    field("Default Priority for Imported Tickets", SettingKind::Choice),
];

const GENERAL_FIELDS: [SettingField; 4] = [
    field("Theme", SettingKind::Choice),
    field("Language", SettingKind::Choice),
    field("Timezone", SettingKind::Choice),
    field("Date Format", SettingKind::Choice),
];

const NOTIFICATION_FIELDS: [SettingField; 4] = [
    field("Email Notifications", SettingKind::Toggle),
    field("Task Reminders", SettingKind::Toggle),
    field("Project Updates", SettingKind::Toggle),
    field("Weekly Reports", SettingKind::Toggle),
];

/// Work the page needs from the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEffect {
    None,
    /// Open the YAML blob in the external editor, then call
    /// [`SettingsPage::apply_yaml`].
    EditYaml,
}

#[derive(Default)]
pub struct SettingsPage {
    pub tab: SettingsTab,
    pub jira_mode: JiraMode,
    pub jira: JiraConnection,
    pub yaml: String,
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub focus: usize,
    /// Text being typed into the focused field.
    pub editing: Option<InputState>,
    pub loading: bool,
    pub testing: bool,
    pub banner: Option<Banner>,
    logs: Vec<LogEntry>,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            yaml: DEFAULT_JIRA_YAML.to_string(),
            ..Self::default()
        }
    }

    /// Reads every stored section. A section that fails to load keeps its
    /// current values.
    pub async fn load(&mut self, clients: &Clients) {
        self.loading = true;
        let store = &clients.settings;

        match store.load_text(SettingsKey::JIRA_YAML, DEFAULT_JIRA_YAML).await {
            Ok(yaml) => self.yaml = yaml,
            Err(e) => log_failure(&mut self.logs, "Failed to load YAML configuration", &e),
        }
        match store.load::<JiraConnection>(SettingsKey::JIRA_FORM).await {
            Ok(jira) => self.jira = jira,
            Err(e) => log_failure(&mut self.logs, "Failed to load JIRA configuration", &e),
        }
        match store.load::<GeneralSettings>(SettingsKey::GENERAL).await {
            Ok(general) => self.general = general,
            Err(e) => log_failure(&mut self.logs, "Failed to load general settings", &e),
        }
        match store.load::<NotificationSettings>(SettingsKey::NOTIFICATIONS).await {
            Ok(notifications) => self.notifications = notifications,
            Err(e) => log_failure(&mut self.logs, "Failed to load notification settings", &e),
        }

        self.loading = false;
    }

    pub fn fields(&self) -> &'static [SettingField] {
        match self.tab {
            SettingsTab::Jira if self.jira_mode == JiraMode::Yaml => &[],
            SettingsTab::Jira => &JIRA_FIELDS,
            SettingsTab::General => &GENERAL_FIELDS,
            SettingsTab::Notifications => &NOTIFICATION_FIELDS,
        }
    }

    /// Display value of field `index` on the current tab.
    pub fn value(&self, index: usize) -> String {
        let flag = |on: bool| String::from(if on { "On" } else { "Off" });
        match (self.tab, index) {
            (SettingsTab::Jira, 0) => self.jira.server_url.clone(),
            (SettingsTab::Jira, 1) => self.jira.username.clone(),
            (SettingsTab::Jira, 2) => "*".repeat(self.jira.api_token.chars().count()),
            (SettingsTab::Jira, 3) => self.jira.default_project.clone(),
            (SettingsTab::Jira, 4) => flag(self.jira.auto_assign),
            (SettingsTab::Jira, 5) => self.jira.default_priority.clone(),
            (SettingsTab::General, 0) => self.general.theme.clone(),
            (SettingsTab::General, 1) => self.general.language.clone(),
            (SettingsTab::General, 2) => self.general.timezone.clone(),
            (SettingsTab::General, 3) => self.general.date_format.clone(),
            (SettingsTab::Notifications, 0) => flag(self.notifications.email_notifications),
            (SettingsTab::Notifications, 1) => flag(self.notifications.task_reminders),
            (SettingsTab::Notifications, 2) => flag(self.notifications.project_updates),
            (SettingsTab::Notifications, 3) => flag(self.notifications.weekly_reports),
            _ => String::new(),
        }
    }

    fn text_slot(&mut self, index: usize) -> Option<&mut String> {
        match (self.tab, index) {
            (SettingsTab::Jira, 0) => Some(&mut self.jira.server_url),
            (SettingsTab::Jira, 1) => Some(&mut self.jira.username),
            (SettingsTab::Jira, 2) => Some(&mut self.jira.api_token),
            (SettingsTab::Jira, 3) => Some(&mut self.jira.default_project),
            _ => None,
        }
    }

    fn toggle_slot(&mut self, index: usize) -> Option<&mut bool> {
        match (self.tab, index) {
            (SettingsTab::Jira, 4) => Some(&mut self.jira.auto_assign),
            (SettingsTab::Notifications, 0) => Some(&mut self.notifications.email_notifications),
            (SettingsTab::Notifications, 1) => Some(&mut self.notifications.task_reminders),
            (SettingsTab::Notifications, 2) => Some(&mut self.notifications.project_updates),
            (SettingsTab::Notifications, 3) => Some(&mut self.notifications.weekly_reports),
            _ => None,
        }
    }

    fn choice_slot(&mut self, index: usize) -> Option<(&mut String, &'static [&'static str])> {
        match (self.tab, index) {
            (SettingsTab::Jira, 5) => Some((&mut self.jira.default_priority, &IMPORT_PRIORITIES)),
            (SettingsTab::General, 0) => Some((&mut self.general.theme, &THEMES)),
            (SettingsTab::General, 1) => Some((&mut self.general.language, &LANGUAGES)),
            (SettingsTab::General, 2) => Some((&mut self.general.timezone, &TIMEZONES)),
            (SettingsTab::General, 3) => Some((&mut self.general.date_format, &DATE_FORMATS)),
            _ => None,
        }
    }

    pub fn captures_input(&self) -> bool {
        self.editing.is_some()
    }

    /// Starts editing, flips or cycles the focused field depending on its
    /// kind.
    pub fn activate_focused(&mut self) {
        let index = self.focus;
        let Some(kind) = self.fields().get(index).map(|f| f.kind) else {
            return;
        };
        match kind {
            SettingKind::Text | SettingKind::Secret => {
                if let Some(text) = self.text_slot(index) {
                    let input = InputState::with_text(text.clone());
                    self.editing = Some(input);
                }
            }
            SettingKind::Toggle => {
                if let Some(flag) = self.toggle_slot(index) {
                    *flag = !*flag;
                }
            }
            SettingKind::Choice => {
                if let Some((value, options)) = self.choice_slot(index) {
                    let next = cycle_option(options, value.as_str());
                    *value = next;
                }
            }
        }
    }

    pub fn switch_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.focus = 0;
        self.editing = None;
    }

    pub fn toggle_jira_mode(&mut self) {
        self.jira_mode = match self.jira_mode {
            JiraMode::Form => JiraMode::Yaml,
            JiraMode::Yaml => JiraMode::Form,
        };
        self.focus = 0;
    }

    /// Replaces the YAML blob with the editor result. Nothing is saved.
    pub fn apply_yaml(&mut self, yaml: String) {
        self.yaml = yaml;
    }

    /// Saves the section shown on the current tab.
    pub async fn save_current(&mut self, clients: &Clients) {
        let store = &clients.settings;
        let (result, success): (TaskdashResult<()>, &str) = match (self.tab, self.jira_mode) {
            (SettingsTab::Jira, JiraMode::Yaml) => (
                store.save_text(SettingsKey::JIRA_YAML, self.yaml.clone()).await,
                YAML_SAVED,
            ),
            (SettingsTab::Jira, JiraMode::Form) => {
                (store.save(SettingsKey::JIRA_FORM, &self.jira).await, JIRA_SAVED)
            }
            (SettingsTab::General, _) => {
                (store.save(SettingsKey::GENERAL, &self.general).await, GENERAL_SAVED)
            }
            (SettingsTab::Notifications, _) => (
                store.save(SettingsKey::NOTIFICATIONS, &self.notifications).await,
                NOTIFICATIONS_SAVED,
            ),
        };

        match result {
            Ok(()) => {
                push_log(&mut self.logs, LogEntry::info(success));
                self.banner = Some(Banner::success(success));
            }
            Err(e) => {
                log_failure(&mut self.logs, "Failed to save settings", &e);
                self.banner = Some(Banner::error(SAVE_FAILED));
            }
        }
    }

    pub async fn test_connection(&mut self, clients: &Clients) {
        if self.testing {
            return;
        }
        self.testing = true;
        let result = clients.importer.test_connection(&self.jira).await;
        self.testing = false;

        if let Err(e) = &result {
            log_failure(&mut self.logs, "JIRA connection test failed", e);
        }
        self.banner = Some(Banner::for_outcome(&result, CONNECTION_OK, CONNECTION_FAILED));
    }

    pub async fn handle_key(&mut self, key: KeyCode, clients: &Clients) -> SettingsEffect {
        if let Some(input) = self.editing.as_mut() {
            match handle_dialog_input(input, key, true) {
                DialogAction::Confirm => {
                    let text = input.as_str().to_string();
                    self.editing = None;
                    let index = self.focus;
                    if let Some(slot) = self.text_slot(index) {
                        *slot = text;
                    }
                }
                DialogAction::Cancel => self.editing = None,
                DialogAction::None => {}
            }
            return SettingsEffect::None;
        }

        let len = self.fields().len();
        match key {
            KeyCode::Left | KeyCode::Char('h') => self.switch_tab(self.tab.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.switch_tab(self.tab.next()),
            KeyCode::Down | KeyCode::Char('j') if len > 0 => self.focus = (self.focus + 1) % len,
            KeyCode::Up | KeyCode::Char('k') if len > 0 => self.focus = (self.focus + len - 1) % len,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char('m') if self.tab == SettingsTab::Jira => self.toggle_jira_mode(),
            KeyCode::Char('e')
                if self.tab == SettingsTab::Jira && self.jira_mode == JiraMode::Yaml =>
            {
                return SettingsEffect::EditYaml
            }
            KeyCode::Char('t') if self.tab == SettingsTab::Jira => self.test_connection(clients).await,
            KeyCode::Char('s') => self.save_current(clients).await,
            _ => {}
        }
        SettingsEffect::None
    }
}

impl Loggable for SettingsPage {
    fn add_log(&mut self, entry: LogEntry) {
        push_log(&mut self.logs, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
