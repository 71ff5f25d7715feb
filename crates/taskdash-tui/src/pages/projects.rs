use crossterm::event::KeyCode;
use taskdash_core::{Editable, InputState, LogEntry, Loggable, SelectionState};
use taskdash_domain::{
    filter_and_sort_projects, FormStatus, Project, ProjectDraft, ProjectId, ProjectLayout,
    ProjectQuery, PROJECT_SAVE_FAILED,
};

use crate::clients::Clients;
use crate::components::{Banner, FormOutcome, FormState};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crate::pages::{log_failure, push_log};

pub const DELETE_PROJECT_PROMPT: &str = "Are you sure you want to delete this project?";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete project. Please try again.";

pub enum ProjectModal {
    Form(FormState<ProjectDraft>),
    ConfirmDelete(ProjectId),
}

#[derive(Default)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub query: ProjectQuery,
    pub layout: ProjectLayout,
    /// Ids that pass the search, in sort order.
    pub visible: Vec<ProjectId>,
    pub selection: SelectionState,
    pub loading: bool,
    pub search_input: Option<InputState>,
    pub modal: Option<ProjectModal>,
    pub banner: Option<Banner>,
    logs: Vec<LogEntry>,
}

impl ProjectsPage {
    pub async fn load(&mut self, clients: &Clients) {
        self.loading = true;
        match clients.projects.list().await {
            Ok(projects) => self.projects = projects,
            Err(e) => log_failure(&mut self.logs, "Failed to load projects", &e),
        }
        self.loading = false;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.visible = filter_and_sort_projects(&self.projects, &self.query);
        self.selection.clamp(self.visible.len());
        if self.visible.is_empty() {
            self.selection.clear();
        }
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.visible
            .iter()
            .filter_map(|id| self.projects.iter().find(|p| p.id == *id))
            .collect()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = *self.visible.get(self.selection.get()?)?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn count_label(&self) -> String {
        format!("{} of {} projects", self.visible.len(), self.projects.len())
    }

    pub fn captures_input(&self) -> bool {
        self.modal.is_some() || self.search_input.is_some()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.recompute();
    }

    pub fn open_create(&mut self) {
        self.modal = Some(ProjectModal::Form(FormState::new(ProjectDraft::default())));
    }

    pub fn open_edit(&mut self) {
        if let Some(project) = self.selected_project() {
            let draft = ProjectDraft::from_entity(project);
            self.modal = Some(ProjectModal::Form(FormState::new(draft)));
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(project) = self.selected_project() {
            self.modal = Some(ProjectModal::ConfirmDelete(project.id));
        }
    }

    pub async fn submit_form(&mut self, clients: &Clients) {
        let Some(ProjectModal::Form(form)) = self.modal.as_mut() else {
            return;
        };
        if form.status.is_submitting() {
            return;
        }
        let draft = &form.model;
        if let Err(e) = draft.validate() {
            form.status = FormStatus::Failed(e.to_string());
            return;
        }
        form.status = FormStatus::Submitting;

        let result = match draft.editing {
            Some(id) => match draft.to_update() {
                Ok(update) => clients.projects.update(id, update).await.map(|_| ()),
                Err(e) => Err(e),
            },
            None => match draft.to_new() {
                Ok(project) => clients.projects.create(project).await.map(|_| ()),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {
                self.modal = None;
                push_log(&mut self.logs, LogEntry::info("Project saved"));
                self.load(clients).await;
            }
            Err(e) => {
                log_failure(&mut self.logs, "Failed to save project", &e);
                if let Some(ProjectModal::Form(form)) = self.modal.as_mut() {
                    form.status = FormStatus::Failed(PROJECT_SAVE_FAILED.to_string());
                }
            }
        }
    }

    pub async fn confirm_delete(&mut self, clients: &Clients) {
        let Some(ProjectModal::ConfirmDelete(id)) = self.modal.take() else {
            return;
        };
        match clients.projects.remove(id).await {
            Ok(()) => self.load(clients).await,
            Err(e) => {
                log_failure(&mut self.logs, "Failed to delete project", &e);
                self.banner = Some(Banner::error(DELETE_PROJECT_FAILED));
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyCode, clients: &Clients) {
        if let Some(input) = self.search_input.as_mut() {
            let action = handle_dialog_input(input, key, true);
            let text = input.as_str().to_string();
            if action != DialogAction::None {
                self.search_input = None;
            }
            self.set_search(text);
            return;
        }

        match self.modal.as_mut() {
            Some(ProjectModal::Form(form)) => match form.handle_key(key) {
                FormOutcome::Submit => self.submit_form(clients).await,
                FormOutcome::Cancel => self.modal = None,
                FormOutcome::None => {}
            },
            Some(ProjectModal::ConfirmDelete(_)) => match handle_confirm_input(key) {
                DialogAction::Confirm => self.confirm_delete(clients).await,
                DialogAction::Cancel => self.modal = None,
                DialogAction::None => {}
            },
            None => {
                let len = self.visible.len();
                match key {
                    KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
                    KeyCode::Up | KeyCode::Char('k') => self.selection.prev(len),
                    KeyCode::Char('/') => {
                        self.search_input = Some(InputState::with_text(self.query.search.clone()))
                    }
                    KeyCode::Char('o') => {
                        self.query.sort = self.query.sort.next();
                        self.recompute();
                    }
                    KeyCode::Char('v') => self.layout = self.layout.toggle(),
                    KeyCode::Char('n') => self.open_create(),
                    KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
                    KeyCode::Char('d') => self.request_delete(),
                    _ => {}
                }
            }
        }
    }
}

impl Loggable for ProjectsPage {
    fn add_log(&mut self, entry: LogEntry) {
        push_log(&mut self.logs, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
