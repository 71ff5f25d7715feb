use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taskdash_core::{LogEntry, Loggable, TaskdashResult};

use crate::clients::Clients;
use crate::components::Banner;
use crate::editor::edit_in_external_editor;
use crate::events::{Event, EventHandler};
use crate::pages::settings::SettingsEffect;
use crate::pages::{DashboardPage, Page, ProjectsPage, SettingsPage, TasksPage, TeamPage};
use crate::ui;

const YAML_TEMP_FILE: &str = "taskdash-jira-config.yaml";

/// Work that needs the terminal rather than page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEffect {
    None,
    EditYaml,
}

pub struct App {
    pub should_quit: bool,
    pub page: Page,
    pub clients: Clients,
    pub dashboard: DashboardPage,
    pub tasks: TasksPage,
    pub projects: ProjectsPage,
    pub team: TeamPage,
    pub settings: SettingsPage,
}

impl App {
    pub fn new(clients: Clients) -> Self {
        Self {
            should_quit: false,
            page: Page::default(),
            clients,
            dashboard: DashboardPage::default(),
            tasks: TasksPage::default(),
            projects: ProjectsPage::default(),
            team: TeamPage::default(),
            settings: SettingsPage::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Shows `page` and fetches its data again.
    pub async fn switch_to(&mut self, page: Page) {
        self.page = page;
        self.reload().await;
    }

    pub async fn reload(&mut self) {
        tracing::debug!("Loading {} page", self.page.title());
        match self.page {
            Page::Dashboard => self.dashboard.load(&self.clients).await,
            Page::Tasks => self.tasks.load(&self.clients).await,
            Page::Projects => self.projects.load(&self.clients).await,
            Page::Team => self.team.load(&self.clients).await,
            Page::Settings => self.settings.load(&self.clients).await,
        }
    }

    /// True while the current page routes every key to a text field,
    /// modal or search box.
    pub fn captures_input(&self) -> bool {
        match self.page {
            Page::Dashboard => false,
            Page::Tasks => self.tasks.captures_input(),
            Page::Projects => self.projects.captures_input(),
            Page::Team => self.team.captures_input(),
            Page::Settings => self.settings.captures_input(),
        }
    }

    pub fn current_logs(&self) -> &[LogEntry] {
        match self.page {
            Page::Dashboard => self.dashboard.get_logs(),
            Page::Tasks => self.tasks.get_logs(),
            Page::Projects => self.projects.get_logs(),
            Page::Team => self.team.get_logs(),
            Page::Settings => self.settings.get_logs(),
        }
    }

    pub fn current_banner(&self) -> Option<&Banner> {
        match self.page {
            Page::Dashboard => None,
            Page::Tasks => self.tasks.banner.as_ref(),
            Page::Projects => self.projects.banner.as_ref(),
            Page::Team => self.team.banner.as_ref(),
            Page::Settings => self.settings.banner.as_ref(),
        }
    }

    fn expire_banners(&mut self) {
        for banner in [
            &mut self.tasks.banner,
            &mut self.projects.banner,
            &mut self.team.banner,
            &mut self.settings.banner,
        ] {
            Banner::clear_expired(banner);
        }
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) -> AppEffect {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return AppEffect::None;
        }

        if !self.captures_input() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return AppEffect::None;
                }
                KeyCode::Char('r') => {
                    self.reload().await;
                    return AppEffect::None;
                }
                KeyCode::Tab => {
                    self.switch_to(self.page.next()).await;
                    return AppEffect::None;
                }
                KeyCode::BackTab => {
                    self.switch_to(self.page.prev()).await;
                    return AppEffect::None;
                }
                KeyCode::Char(c) => {
                    if let Some(page) = Page::from_shortcut(c) {
                        self.switch_to(page).await;
                        return AppEffect::None;
                    }
                }
                _ => {}
            }
        }

        match self.page {
            Page::Dashboard => {}
            Page::Tasks => self.tasks.handle_key(key.code, &self.clients).await,
            Page::Projects => self.projects.handle_key(key.code, &self.clients).await,
            Page::Team => self.team.handle_key(key.code, &self.clients).await,
            Page::Settings => {
                if self.settings.handle_key(key.code, &self.clients).await == SettingsEffect::EditYaml {
                    return AppEffect::EditYaml;
                }
            }
        }
        AppEffect::None
    }

    fn edit_yaml(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) {
        let temp_file = std::env::temp_dir().join(YAML_TEMP_FILE);
        match edit_in_external_editor(terminal, events, &temp_file, &self.settings.yaml) {
            Ok(Some(yaml)) => self.settings.apply_yaml(yaml),
            Ok(None) => tracing::info!("Editor exited without saving; YAML unchanged"),
            Err(e) => {
                tracing::error!("Failed to edit YAML configuration: {}", e);
                self.settings.add_log(LogEntry::error(format!("Editor failed: {}", e)));
                self.settings.banner = Some(Banner::error(e.to_string()));
            }
        }
    }

    pub async fn run(&mut self) -> TaskdashResult<()> {
        let mut terminal = setup_terminal()?;
        self.reload().await;

        while !self.should_quit {
            let mut events = EventHandler::new();

            loop {
                terminal.draw(|frame| ui::render(self, frame))?;

                if let Some(event) = events.next().await {
                    match event {
                        Event::Key(key) => {
                            if self.handle_key_event(key).await == AppEffect::EditYaml {
                                self.edit_yaml(&mut terminal, &events);
                                break;
                            }
                        }
                        Event::Tick => self.expire_banners(),
                    }
                }

                if self.should_quit {
                    break;
                }
            }

            events.stop();
        }

        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
