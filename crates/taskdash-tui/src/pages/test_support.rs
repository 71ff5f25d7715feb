//! Mock collaborators for page tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use taskdash_client::{JiraStubProvider, ProjectResource, TaskResource, TeamMemberResource};
use taskdash_core::TaskdashResult;
use taskdash_domain::{
    MemberId, NewProject, NewTask, NewTeamMember, Project, ProjectId, ProjectUpdate, Task, TaskId,
    TaskStats, TaskStatus, TaskUpdate, TeamMember, TeamMemberUpdate,
};
use taskdash_persistence::SettingsRepository;
use tempfile::TempDir;

use crate::clients::Clients;

mock! {
    pub Tasks {}

    #[async_trait]
    impl TaskResource for Tasks {
        async fn list(&self) -> TaskdashResult<Vec<Task>>;
        async fn create(&self, task: NewTask) -> TaskdashResult<Task>;
        async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task>;
        async fn patch(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task>;
        async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskdashResult<Task>;
        async fn remove(&self, id: TaskId) -> TaskdashResult<()>;
        async fn stats(&self) -> TaskdashResult<TaskStats>;
    }
}

mock! {
    pub Projects {}

    #[async_trait]
    impl ProjectResource for Projects {
        async fn list(&self) -> TaskdashResult<Vec<Project>>;
        async fn create(&self, project: NewProject) -> TaskdashResult<Project>;
        async fn update(&self, id: ProjectId, update: ProjectUpdate) -> TaskdashResult<Project>;
        async fn remove(&self, id: ProjectId) -> TaskdashResult<()>;
    }
}

mock! {
    pub Members {}

    #[async_trait]
    impl TeamMemberResource for Members {
        async fn list(&self) -> TaskdashResult<Vec<TeamMember>>;
        async fn create(&self, member: NewTeamMember) -> TaskdashResult<TeamMember>;
        async fn update(&self, id: MemberId, update: TeamMemberUpdate) -> TaskdashResult<TeamMember>;
        async fn remove(&self, id: MemberId) -> TaskdashResult<()>;
    }
}

/// Settings store that keeps everything in memory.
#[derive(Default)]
pub struct MemorySettings {
    values: std::sync::Mutex<std::collections::BTreeMap<String, Value>>,
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn get_raw(&self, key: &str) -> TaskdashResult<Option<Value>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: Value) -> TaskdashResult<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskdashResult<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }

    async fn entries(&self) -> TaskdashResult<Vec<(String, Value)>> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn location(&self) -> Option<&std::path::Path> {
        None
    }
}

/// Builds [`Clients`] where every resource not supplied is a mock that
/// fails the test if it is called.
pub struct ClientsBuilder {
    tasks: MockTasks,
    projects: MockProjects,
    members: MockMembers,
    settings: Arc<dyn SettingsRepository>,
}

pub fn clients() -> ClientsBuilder {
    ClientsBuilder {
        tasks: MockTasks::new(),
        projects: MockProjects::new(),
        members: MockMembers::new(),
        settings: Arc::new(MemorySettings::default()),
    }
}

impl ClientsBuilder {
    pub fn with_tasks(mut self, tasks: MockTasks) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_projects(mut self, projects: MockProjects) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_members(mut self, members: MockMembers) -> Self {
        self.members = members;
        self
    }

    pub fn with_settings(mut self, settings: Arc<dyn SettingsRepository>) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Clients {
        Clients {
            tasks: Arc::new(self.tasks),
            projects: Arc::new(self.projects),
            members: Arc::new(self.members),
            importer: Arc::new(JiraStubProvider::new(Duration::ZERO)),
            settings: self.settings,
        }
    }
}

pub fn task(id: TaskId, title: &str, status: &str) -> Task {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "priority": "MEDIUM",
        "status": status,
        "createdAt": "2024-01-01T00:00:00"
    }))
    .unwrap()
}

pub fn project(id: ProjectId, name: &str) -> Project {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "createdAt": "2024-01-01T00:00:00",
        "tasks": []
    }))
    .unwrap()
}

pub fn member(id: MemberId, name: &str) -> TeamMember {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": "Developer"
    }))
    .unwrap()
}

pub fn temp_settings() -> (TempDir, Arc<dyn SettingsRepository>) {
    let dir = TempDir::new().unwrap();
    let store = taskdash_persistence::JsonSettingsStore::new(dir.path().join("settings.json"));
    (dir, Arc::new(store))
}
