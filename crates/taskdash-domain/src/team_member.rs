use serde::{Deserialize, Serialize};

use crate::format::initials;
use crate::timestamp::Timestamp;

pub type MemberId = i64;

/// Roles offered by the member form. The backend accepts any text.
pub const MEMBER_ROLES: [&str; 4] = ["Developer", "Designer", "Product Manager", "QA"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Timestamp,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        initials(&self.name, None)
    }
}

/// Body of `POST /team-members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Body of `PATCH /team-members/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl TeamMemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
