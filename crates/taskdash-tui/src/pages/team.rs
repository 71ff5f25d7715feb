use crossterm::event::KeyCode;
use taskdash_core::{Editable, LogEntry, Loggable, SelectionState};
use taskdash_domain::{FormStatus, MemberId, TeamMember, TeamMemberDraft, MEMBER_SAVE_FAILED};

use crate::clients::Clients;
use crate::components::{Banner, FormOutcome, FormState};
use crate::dialog::{handle_confirm_input, DialogAction};
use crate::pages::{log_failure, push_log};

pub const REMOVE_MEMBER_PROMPT: &str = "Are you sure you want to remove this team member?";
pub const REMOVE_MEMBER_FAILED: &str = "Failed to remove team member. Please try again.";

pub enum TeamModal {
    Form(FormState<TeamMemberDraft>),
    ConfirmRemove(MemberId),
}

#[derive(Default)]
pub struct TeamPage {
    pub members: Vec<TeamMember>,
    pub selection: SelectionState,
    pub loading: bool,
    pub modal: Option<TeamModal>,
    pub banner: Option<Banner>,
    logs: Vec<LogEntry>,
}

impl TeamPage {
    pub async fn load(&mut self, clients: &Clients) {
        self.loading = true;
        match clients.members.list().await {
            Ok(members) => self.members = members,
            Err(e) => log_failure(&mut self.logs, "Failed to load team members", &e),
        }
        self.loading = false;
        self.selection.clamp(self.members.len());
        if self.members.is_empty() {
            self.selection.clear();
        }
    }

    pub fn selected_member(&self) -> Option<&TeamMember> {
        self.members.get(self.selection.get()?)
    }

    pub fn captures_input(&self) -> bool {
        self.modal.is_some()
    }

    pub fn open_create(&mut self) {
        self.modal = Some(TeamModal::Form(FormState::new(TeamMemberDraft::default())));
    }

    pub fn open_edit(&mut self) {
        if let Some(member) = self.selected_member() {
            let draft = TeamMemberDraft::from_entity(member);
            self.modal = Some(TeamModal::Form(FormState::new(draft)));
        }
    }

    pub fn request_remove(&mut self) {
        if let Some(member) = self.selected_member() {
            self.modal = Some(TeamModal::ConfirmRemove(member.id));
        }
    }

    pub async fn submit_form(&mut self, clients: &Clients) {
        let Some(TeamModal::Form(form)) = self.modal.as_mut() else {
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
                Ok(update) => clients.members.update(id, update).await.map(|_| ()),
                Err(e) => Err(e),
            },
            None => match draft.to_new() {
                Ok(member) => clients.members.create(member).await.map(|_| ()),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {
                self.modal = None;
                push_log(&mut self.logs, LogEntry::info("Team member saved"));
                self.load(clients).await;
            }
            Err(e) => {
                log_failure(&mut self.logs, "Failed to save team member", &e);
                if let Some(TeamModal::Form(form)) = self.modal.as_mut() {
                    form.status = FormStatus::Failed(MEMBER_SAVE_FAILED.to_string());
                }
            }
        }
    }

    pub async fn confirm_remove(&mut self, clients: &Clients) {
        let Some(TeamModal::ConfirmRemove(id)) = self.modal.take() else {
            return;
        };
        match clients.members.remove(id).await {
            Ok(()) => self.load(clients).await,
            Err(e) => {
                log_failure(&mut self.logs, "Failed to remove team member", &e);
                self.banner = Some(Banner::error(REMOVE_MEMBER_FAILED));
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyCode, clients: &Clients) {
        match self.modal.as_mut() {
            Some(TeamModal::Form(form)) => match form.handle_key(key) {
                FormOutcome::Submit => self.submit_form(clients).await,
                FormOutcome::Cancel => self.modal = None,
                FormOutcome::None => {}
            },
            Some(TeamModal::ConfirmRemove(_)) => match handle_confirm_input(key) {
                DialogAction::Confirm => self.confirm_remove(clients).await,
                DialogAction::Cancel => self.modal = None,
                DialogAction::None => {}
            },
            None => {
                let len = self.members.len();
                match key {
                    KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
                    KeyCode::Up | KeyCode::Char('k') => self.selection.prev(len),
                    KeyCode::Char('n') => self.open_create(),
                    KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
                    KeyCode::Char('d') => self.request_remove(),
                    _ => {}
                }
            }
        }
    }
}

impl Loggable for TeamPage {
    fn add_log(&mut self, entry: LogEntry) {
        push_log(&mut self.logs, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
