use async_trait::async_trait;
use reqwest::Method;
use taskdash_core::TaskdashResult;
use taskdash_domain::{MemberId, NewTeamMember, TeamMember, TeamMemberUpdate};

use crate::client::ApiClient;

const TEAM_MEMBERS: &str = "/team-members";

#[async_trait]
pub trait TeamMemberResource: Send + Sync {
    async fn list(&self) -> TaskdashResult<Vec<TeamMember>>;

    async fn create(&self, member: NewTeamMember) -> TaskdashResult<TeamMember>;

    async fn update(&self, id: MemberId, update: TeamMemberUpdate) -> TaskdashResult<TeamMember>;

    async fn remove(&self, id: MemberId) -> TaskdashResult<()>;
}

#[async_trait]
impl TeamMemberResource for ApiClient {
    async fn list(&self) -> TaskdashResult<Vec<TeamMember>> {
        self.get_json(TEAM_MEMBERS).await
    }

    async fn create(&self, member: NewTeamMember) -> TaskdashResult<TeamMember> {
        self.send_json(Method::POST, TEAM_MEMBERS, &member).await
    }

    async fn update(&self, id: MemberId, update: TeamMemberUpdate) -> TaskdashResult<TeamMember> {
        self.send_json(Method::PATCH, &format!("{}/{}", TEAM_MEMBERS, id), &update)
            .await
    }

    async fn remove(&self, id: MemberId) -> TaskdashResult<()> {
        self.delete(&format!("{}/{}", TEAM_MEMBERS, id)).await
    }
}
