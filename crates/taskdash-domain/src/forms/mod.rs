//! Form models for the create/edit modals.
//!
//! A draft holds the editable values of one record. Validation only checks
//! required fields; everything else is left to the backend.

pub mod member_form;
pub mod project_form;
pub mod task_form;

pub use member_form::TeamMemberDraft;
pub use project_form::ProjectDraft;
pub use task_form::TaskDraft;

use taskdash_core::{TaskdashError, TaskdashResult};

/// Submission state of an open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    /// A request is in flight; further submits are ignored.
    Submitting,
    /// The last submit failed. The form stays open and editable.
    Failed(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub(crate) fn require(value: &str, field: &str) -> TaskdashResult<()> {
    if value.trim().is_empty() {
        return Err(TaskdashError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
