use async_trait::async_trait;
use reqwest::Method;
use taskdash_core::TaskdashResult;
use taskdash_domain::{NewProject, Project, ProjectId, ProjectUpdate};

use crate::client::ApiClient;

const PROJECTS: &str = "/projects";

#[async_trait]
pub trait ProjectResource: Send + Sync {
    async fn list(&self) -> TaskdashResult<Vec<Project>>;

    async fn create(&self, project: NewProject) -> TaskdashResult<Project>;

    async fn update(&self, id: ProjectId, update: ProjectUpdate) -> TaskdashResult<Project>;

    async fn remove(&self, id: ProjectId) -> TaskdashResult<()>;
}

#[async_trait]
impl ProjectResource for ApiClient {
    async fn list(&self) -> TaskdashResult<Vec<Project>> {
        self.get_json(PROJECTS).await
    }

    async fn create(&self, project: NewProject) -> TaskdashResult<Project> {
        self.send_json(Method::POST, PROJECTS, &project).await
    }

    async fn update(&self, id: ProjectId, update: ProjectUpdate) -> TaskdashResult<Project> {
        self.send_json(Method::PATCH, &format!("{}/{}", PROJECTS, id), &update)
            .await
    }

    async fn remove(&self, id: ProjectId) -> TaskdashResult<()> {
        self.delete(&format!("{}/{}", PROJECTS, id)).await
    }
}
