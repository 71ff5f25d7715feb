//! Form field mappings for the create/edit modals.

use taskdash_domain::{
    MemberId, Project, ProjectDraft, ProjectId, TaskDraft, TeamMember, TeamMemberDraft,
    UNASSIGNED_LABEL,
};

use crate::components::{FormField, FormModel};

const TASK_FIELDS: [FormField; 6] = [
    FormField::text("Title *"),
    FormField::text("Description"),
    FormField::choice("Priority"),
    FormField::text("Due Date (YYYY-MM-DD)"),
    FormField::choice("Project"),
    FormField::choice("Assignee"),
];

const PROJECT_FIELDS: [FormField; 2] = [FormField::text("Project Name *"), FormField::text("Description")];

const MEMBER_FIELDS: [FormField; 3] = [
    FormField::text("Name *"),
    FormField::text("Email *"),
    FormField::choice("Role"),
];

/// Task draft plus the project and member options offered by its pickers.
pub struct TaskFormModel {
    pub draft: TaskDraft,
    projects: Vec<(ProjectId, String)>,
    members: Vec<(MemberId, String)>,
}

impl TaskFormModel {
    pub fn new(draft: TaskDraft, projects: &[Project], members: &[TeamMember]) -> Self {
        Self {
            draft,
            projects: projects.iter().map(|p| (p.id, p.name.clone())).collect(),
            members: members.iter().map(|m| (m.id, m.name.clone())).collect(),
        }
    }
}

fn option_name(options: &[(i64, String)], id: Option<i64>, none_label: &str) -> String {
    match id {
        None => none_label.to_string(),
        Some(id) => options
            .iter()
            .find(|(option, _)| *option == id)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| format!("#{}", id)),
    }
}

/// Steps through `None` followed by every option id.
fn cycle_id(current: Option<i64>, options: &[(i64, String)], forward: bool) -> Option<i64> {
    let ids: Vec<Option<i64>> = std::iter::once(None)
        .chain(options.iter().map(|(id, _)| Some(*id)))
        .collect();
    let position = ids.iter().position(|id| *id == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % ids.len()
    } else {
        (position + ids.len() - 1) % ids.len()
    };
    ids[next]
}

impl FormModel for TaskFormModel {
    fn heading(&self) -> &'static str {
        self.draft.heading()
    }

    fn fields(&self) -> &'static [FormField] {
        &TASK_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.draft.title.clone(),
            1 => self.draft.description.clone(),
            2 => self.draft.priority.display_name().to_string(),
            3 => self.draft.due_date.clone(),
            4 => option_name(&self.projects, self.draft.project_id, "No Project"),
            5 => option_name(&self.members, self.draft.team_member_id, UNASSIGNED_LABEL),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: String) {
        match index {
            0 => self.draft.title = value,
            1 => self.draft.description = value,
            3 => self.draft.due_date = value,
            _ => {}
        }
    }

    fn cycle(&mut self, index: usize, forward: bool) {
        match index {
            2 => {
                let steps = if forward { 1 } else { 2 };
                for _ in 0..steps {
                    self.draft.priority = self.draft.priority.next();
                }
            }
            4 => self.draft.project_id = cycle_id(self.draft.project_id, &self.projects, forward),
            5 => {
                self.draft.team_member_id = cycle_id(self.draft.team_member_id, &self.members, forward)
            }
            _ => {}
        }
    }
}

impl FormModel for ProjectDraft {
    fn heading(&self) -> &'static str {
        ProjectDraft::heading(self)
    }

    fn fields(&self) -> &'static [FormField] {
        &PROJECT_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.name.clone(),
            1 => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.description = value,
            _ => {}
        }
    }

    fn cycle(&mut self, _index: usize, _forward: bool) {}
}

impl FormModel for TeamMemberDraft {
    fn heading(&self) -> &'static str {
        TeamMemberDraft::heading(self)
    }

    fn fields(&self) -> &'static [FormField] {
        &MEMBER_FIELDS
    }

    fn value(&self, index: usize) -> String {
        match index {
            0 => self.name.clone(),
            1 => self.email.clone(),
            2 => self.role.clone(),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, index: usize, value: String) {
        match index {
            0 => self.name = value,
            1 => self.email = value,
            _ => {}
        }
    }

    fn cycle(&mut self, index: usize, _forward: bool) {
        if index == 2 {
            self.cycle_role();
        }
    }
}
