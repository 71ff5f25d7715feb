use taskdash_core::{Editable, TaskdashError, TaskdashResult};

use super::require;
use crate::team_member::{MemberId, NewTeamMember, TeamMember, TeamMemberUpdate, MEMBER_ROLES};

pub const MEMBER_SAVE_FAILED: &str = "Failed to save team member. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberDraft {
    pub editing: Option<MemberId>,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Default for TeamMemberDraft {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            email: String::new(),
            role: MEMBER_ROLES[0].to_string(),
        }
    }
}

impl TeamMemberDraft {
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Team Member"
        } else {
            "Add Team Member"
        }
    }

    /// Moves the role to the next offered value. A custom role from the
    /// backend restarts the cycle.
    pub fn cycle_role(&mut self) {
        let next = MEMBER_ROLES
            .iter()
            .position(|role| *role == self.role)
            .map_or(0, |i| (i + 1) % MEMBER_ROLES.len());
        self.role = MEMBER_ROLES[next].to_string();
    }

    pub fn validate(&self) -> TaskdashResult<()> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err(TaskdashError::Validation(format!(
                "'{}' is not an email address",
                self.email.trim()
            )));
        }
        Ok(())
    }

    pub fn to_new(&self) -> TaskdashResult<NewTeamMember> {
        self.validate()?;
        Ok(NewTeamMember {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.clone(),
        })
    }

    pub fn to_update(&self) -> TaskdashResult<TeamMemberUpdate> {
        self.validate()?;
        Ok(TeamMemberUpdate {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            role: Some(self.role.clone()),
        })
    }
}

impl Editable<TeamMember> for TeamMemberDraft {
    fn from_entity(member: &TeamMember) -> Self {
        Self {
            editing: Some(member.id),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
        }
    }
}
