use crossterm::event::KeyCode;
use taskdash_core::{Editable, InputState, LogEntry, Loggable, SelectionState};
use taskdash_domain::{
    project_tasks, resolve_ids, FormStatus, GroupBy, Project, Task, TaskDraft, TaskFilters, TaskId,
    TaskLayout, TaskPriority, TaskProjection, TaskStatus, TeamMember, TASK_SAVE_FAILED,
};

use crate::clients::Clients;
use crate::components::{Banner, FormOutcome, FormState};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crate::pages::forms::TaskFormModel;
use crate::pages::{log_failure, push_log};

pub const DELETE_TASK_PROMPT: &str = "Are you sure you want to delete this task?";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update task status. Please try again.";
pub const DELETE_TASK_FAILED: &str = "Failed to delete task. Please try again.";
pub const IMPORT_FAILED: &str = "Failed to import JIRA ticket. Please try again.";

/// Ticket id prompt of the import modal.
pub struct ImportState {
    pub input: InputState,
    pub status: FormStatus,
}

pub enum TaskModal {
    Form(FormState<TaskFormModel>),
    Import(ImportState),
    ConfirmDelete(TaskId),
}

pub struct TasksPage {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub members: Vec<TeamMember>,
    pub filters: TaskFilters,
    pub group_by: GroupBy,
    pub layout: TaskLayout,
    pub projection: TaskProjection,
    pub selection: SelectionState,
    pub loading: bool,
    /// Present while the search box has focus.
    pub search_input: Option<InputState>,
    pub modal: Option<TaskModal>,
    pub banner: Option<Banner>,
    logs: Vec<LogEntry>,
}

impl Default for TasksPage {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            projects: Vec::new(),
            members: Vec::new(),
            filters: TaskFilters::default(),
            group_by: GroupBy::Assignee,
            layout: TaskLayout::Board,
            projection: TaskProjection::default(),
            selection: SelectionState::new(),
            loading: false,
            search_input: None,
            modal: None,
            banner: None,
            logs: Vec::new(),
        }
    }
}

impl TasksPage {
    /// Fetches tasks, projects and members concurrently. A failed call keeps
    /// the previously loaded collection and does not block the others.
    pub async fn load(&mut self, clients: &Clients) {
        self.loading = true;
        let (tasks, projects, members) = tokio::join!(
            clients.tasks.list(),
            clients.projects.list(),
            clients.members.list()
        );

        match tasks {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => log_failure(&mut self.logs, "Failed to load tasks", &e),
        }
        match projects {
            Ok(projects) => self.projects = projects,
            Err(e) => log_failure(&mut self.logs, "Failed to load projects", &e),
        }
        match members {
            Ok(members) => self.members = members,
            Err(e) => log_failure(&mut self.logs, "Failed to load team members", &e),
        }

        self.loading = false;
        self.recompute();
    }

    /// Reloads only the task collection after a mutation.
    async fn reload_tasks(&mut self, clients: &Clients) {
        match clients.tasks.list().await {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => log_failure(&mut self.logs, "Failed to load tasks", &e),
        }
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.projection = project_tasks(&self.tasks, &self.filters, self.group_by);
        self.selection.clamp(self.projection.len());
        if self.projection.is_empty() {
            self.selection.clear();
        }
    }

    /// Visible task ids in display order: group by group.
    pub fn display_order(&self) -> Vec<TaskId> {
        self.projection
            .groups
            .iter()
            .flat_map(|group| group.task_ids.iter().copied())
            .collect()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let id = *self.display_order().get(self.selection.get()?)?;
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn resolve(&self, ids: &[TaskId]) -> Vec<&Task> {
        resolve_ids(ids, &self.tasks)
    }

    pub fn count_label(&self) -> String {
        self.projection.count_label(self.tasks.len())
    }

    pub fn captures_input(&self) -> bool {
        self.modal.is_some() || self.search_input.is_some()
    }

    pub fn cycle_status_filter(&mut self) {
        self.filters.status = match &self.filters.status {
            None => Some(TaskStatus::Todo),
            Some(TaskStatus::Completed) | Some(TaskStatus::Other(_)) => None,
            Some(status) => Some(status.next()),
        };
        self.recompute();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.filters.priority = match &self.filters.priority {
            None => Some(TaskPriority::Low),
            Some(TaskPriority::High) | Some(TaskPriority::Other(_)) => None,
            Some(priority) => Some(priority.next()),
        };
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.recompute();
    }

    pub fn open_create(&mut self) {
        let model = TaskFormModel::new(TaskDraft::default(), &self.projects, &self.members);
        self.modal = Some(TaskModal::Form(FormState::new(model)));
    }

    pub fn open_edit(&mut self) {
        if let Some(task) = self.selected_task() {
            let model = TaskFormModel::new(TaskDraft::from_entity(task), &self.projects, &self.members);
            self.modal = Some(TaskModal::Form(FormState::new(model)));
        }
    }

    pub fn open_import(&mut self) {
        self.modal = Some(TaskModal::Import(ImportState {
            input: InputState::new(),
            status: FormStatus::Editing,
        }));
    }

    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.modal = Some(TaskModal::ConfirmDelete(task.id));
        }
    }

    /// Creates or fully updates the task in the open form, then reloads.
    pub async fn submit_form(&mut self, clients: &Clients) {
        let Some(TaskModal::Form(form)) = self.modal.as_mut() else {
            return;
        };
        if form.status.is_submitting() {
            return;
        }
        let draft = &form.model.draft;
        if let Err(e) = draft.validate() {
            form.status = FormStatus::Failed(e.to_string());
            return;
        }
        form.status = FormStatus::Submitting;

        let result = match draft.editing {
            Some(id) => match draft.to_update() {
                Ok(update) => clients.tasks.update(id, update).await.map(|_| ()),
                Err(e) => Err(e),
            },
            None => match draft.to_new() {
                Ok(task) => clients.tasks.create(task).await.map(|_| ()),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {
                self.modal = None;
                push_log(&mut self.logs, LogEntry::info("Task saved"));
                self.reload_tasks(clients).await;
            }
            Err(e) => {
                log_failure(&mut self.logs, "Failed to save task", &e);
                if let Some(TaskModal::Form(form)) = self.modal.as_mut() {
                    form.status = FormStatus::Failed(TASK_SAVE_FAILED.to_string());
                }
            }
        }
    }

    /// Moves the selected task to its next status through the status-only
    /// endpoint.
    pub async fn advance_status(&mut self, clients: &Clients) {
        let Some((id, next)) = self.selected_task().map(|t| (t.id, t.status.next())) else {
            return;
        };
        match clients.tasks.update_status(id, next).await {
            Ok(_) => self.reload_tasks(clients).await,
            Err(e) => {
                log_failure(&mut self.logs, "Failed to update task status", &e);
                self.banner = Some(Banner::error(STATUS_UPDATE_FAILED));
            }
        }
    }

    pub async fn confirm_delete(&mut self, clients: &Clients) {
        let Some(TaskModal::ConfirmDelete(id)) = self.modal.take() else {
            return;
        };
        match clients.tasks.remove(id).await {
            Ok(()) => self.reload_tasks(clients).await,
            Err(e) => {
                log_failure(&mut self.logs, "Failed to delete task", &e);
                self.banner = Some(Banner::error(DELETE_TASK_FAILED));
            }
        }
    }

    /// Builds the ticket through the import provider and creates it as a task.
    pub async fn submit_import(&mut self, clients: &Clients) {
        let Some(TaskModal::Import(state)) = self.modal.as_mut() else {
            return;
        };
        if state.status.is_submitting() || state.input.is_blank() {
            return;
        }
        state.status = FormStatus::Submitting;
        let ticket_id = state.input.as_str().trim().to_string();

        let result = match clients.importer.fetch_ticket(&ticket_id).await {
            Ok(task) => clients.tasks.create(task).await.map(|_| ()),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.modal = None;
                push_log(&mut self.logs, LogEntry::info(format!("Imported {}", ticket_id)));
                self.reload_tasks(clients).await;
            }
            Err(e) => {
                log_failure(&mut self.logs, "Failed to import JIRA ticket", &e);
                if let Some(TaskModal::Import(state)) = self.modal.as_mut() {
                    state.status = FormStatus::Failed(IMPORT_FAILED.to_string());
                }
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
            Some(TaskModal::Form(form)) => match form.handle_key(key) {
                FormOutcome::Submit => self.submit_form(clients).await,
                FormOutcome::Cancel => self.modal = None,
                FormOutcome::None => {}
            },
            Some(TaskModal::Import(state)) => {
                if state.status.is_submitting() {
                    return;
                }
                match handle_dialog_input(&mut state.input, key, false) {
                    DialogAction::Confirm => self.submit_import(clients).await,
                    DialogAction::Cancel => self.modal = None,
                    DialogAction::None => {}
                }
            }
            Some(TaskModal::ConfirmDelete(_)) => match handle_confirm_input(key) {
                DialogAction::Confirm => self.confirm_delete(clients).await,
                DialogAction::Cancel => self.modal = None,
                DialogAction::None => {}
            },
            None => self.handle_list_key(key, clients).await,
        }
    }

    async fn handle_list_key(&mut self, key: KeyCode, clients: &Clients) {
        let len = self.projection.len();
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(len),
            KeyCode::Char('/') => {
                self.search_input = Some(InputState::with_text(self.filters.search.clone()))
            }
            KeyCode::Char('s') => self.cycle_status_filter(),
            KeyCode::Char('p') => self.cycle_priority_filter(),
            KeyCode::Char('g') => {
                self.group_by = self.group_by.next();
                self.recompute();
            }
            KeyCode::Char('v') => self.layout = self.layout.next(),
            KeyCode::Char('c') => {
                self.filters.clear();
                self.recompute();
            }
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            KeyCode::Char('x') => self.advance_status(clients).await,
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('i') => self.open_import(),
            _ => {}
        }
    }
}

impl Loggable for TasksPage {
    fn add_log(&mut self, entry: LogEntry) {
        push_log(&mut self.logs, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
