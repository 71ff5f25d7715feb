use taskdash_core::{Editable, TaskdashResult};

use super::{optional_text, require};
use crate::project::{NewProject, Project, ProjectId, ProjectUpdate};

pub const PROJECT_SAVE_FAILED: &str = "Failed to save project. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub editing: Option<ProjectId>,
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Project"
        } else {
            "Create New Project"
        }
    }

    pub fn validate(&self) -> TaskdashResult<()> {
        require(&self.name, "Project name")
    }

    pub fn to_new(&self) -> TaskdashResult<NewProject> {
        self.validate()?;
        Ok(NewProject {
            name: self.name.trim().to_string(),
            description: optional_text(&self.description),
        })
    }

    pub fn to_update(&self) -> TaskdashResult<ProjectUpdate> {
        self.validate()?;
        Ok(ProjectUpdate {
            name: Some(self.name.trim().to_string()),
            description: optional_text(&self.description).into(),
        })
    }
}

impl Editable<Project> for ProjectDraft {
    fn from_entity(project: &Project) -> Self {
        Self {
            editing: Some(project.id),
            name: project.name.clone(),
            description: project.description_text().to_string(),
        }
    }
}
