use async_trait::async_trait;
use reqwest::Method;
use taskdash_core::TaskdashResult;
use taskdash_domain::{NewTask, Task, TaskId, TaskStats, TaskStatus, TaskUpdate};

use crate::client::{read_json, send, ApiClient};

const TASKS: &str = "/tasks";

#[async_trait]
pub trait TaskResource: Send + Sync {
    async fn list(&self) -> TaskdashResult<Vec<Task>>;

    async fn create(&self, task: NewTask) -> TaskdashResult<Task>;

    /// Full replacement (`PUT`).
    async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task>;

    /// Merge update (`PATCH`): only the fields present in the body change.
    async fn patch(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task>;

    /// Changes only the status through the dedicated endpoint.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskdashResult<Task>;

    async fn remove(&self, id: TaskId) -> TaskdashResult<()>;

    async fn stats(&self) -> TaskdashResult<TaskStats>;
}

#[async_trait]
impl TaskResource for ApiClient {
    async fn list(&self) -> TaskdashResult<Vec<Task>> {
        self.get_json(TASKS).await
    }

    async fn create(&self, task: NewTask) -> TaskdashResult<Task> {
        self.send_json(Method::POST, TASKS, &task).await
    }

    async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task> {
        self.send_json(Method::PUT, &format!("{}/{}", TASKS, id), &update)
            .await
    }

    async fn patch(&self, id: TaskId, update: TaskUpdate) -> TaskdashResult<Task> {
        self.send_json(Method::PATCH, &format!("{}/{}", TASKS, id), &update)
            .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskdashResult<Task> {
        let path = format!("{}/{}/status", TASKS, id);
        let request = self
            .request(Method::PATCH, &path)
            .query(&[("status", status.as_str())]);
        read_json(send(request, &path).await?).await
    }

    async fn remove(&self, id: TaskId) -> TaskdashResult<()> {
        self.delete(&format!("{}/{}", TASKS, id)).await
    }

    async fn stats(&self) -> TaskdashResult<TaskStats> {
        self.get_json(&format!("{}/stats", TASKS)).await
    }
}
