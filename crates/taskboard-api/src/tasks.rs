use std::sync::Arc;

use async_trait::async_trait;
use taskboard_core::{ApiConfig, TaskboardError, TaskboardResult};
use taskboard_domain::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest};

use crate::session::SessionStore;

/// The remote task store, as the board consumes it.
///
/// Every call resolves the bearer token before any I/O and fails with
/// [`TaskboardError::MissingToken`] when the session has none; that failure
/// is never retried automatically.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full ordered task collection.
    async fn fetch_tasks(&self) -> TaskboardResult<Vec<Task>>;

    /// Create a task; the server assigns id, timestamps, and initial status.
    async fn create_task(&self, request: CreateTaskRequest) -> TaskboardResult<Task>;

    /// Partially update a task (PATCH semantics).
    async fn update_task(&self, id: TaskId, request: UpdateTaskRequest) -> TaskboardResult<Task>;

    /// Delete a task.
    async fn delete_task(&self, id: TaskId) -> TaskboardResult<()>;
}

/// REST implementation of [`TaskApi`] over `reqwest`.
pub struct HttpTaskApi {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<SessionStore>,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    fn bearer(&self) -> TaskboardResult<String> {
        self.session.token().ok_or(TaskboardError::MissingToken)
    }

    async fn check_status(
        response: reqwest::Response,
        failure: &str,
    ) -> TaskboardResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            tracing::warn!(%status, "{failure}");
            Err(TaskboardError::Remote(format!("{failure} (HTTP {status})")))
        }
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_tasks(&self) -> TaskboardResult<Vec<Task>> {
        let token = self.bearer()?;
        tracing::debug!("fetching task collection");

        let response = self
            .http
            .get(self.config.tasks_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| TaskboardError::Connection(e.to_string()))?;

        let response = Self::check_status(response, "failed to fetch tasks").await?;
        response
            .json()
            .await
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    async fn create_task(&self, request: CreateTaskRequest) -> TaskboardResult<Task> {
        let token = self.bearer()?;
        tracing::debug!(title = %request.title, "creating task");

        let response = self
            .http
            .post(self.config.tasks_url())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| TaskboardError::Connection(e.to_string()))?;

        let response = Self::check_status(response, "failed to create task").await?;
        response
            .json()
            .await
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    async fn update_task(&self, id: TaskId, request: UpdateTaskRequest) -> TaskboardResult<Task> {
        let token = self.bearer()?;
        tracing::debug!(task_id = id, "updating task");

        let response = self
            .http
            .patch(self.config.task_url(id))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| TaskboardError::Connection(e.to_string()))?;

        let response = Self::check_status(response, "failed to update task").await?;
        response
            .json()
            .await
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    async fn delete_task(&self, id: TaskId) -> TaskboardResult<()> {
        let token = self.bearer()?;
        tracing::debug!(task_id = id, "deleting task");

        let response = self
            .http
            .delete(self.config.task_url(id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| TaskboardError::Connection(e.to_string()))?;

        Self::check_status(response, "failed to delete task").await?;
        Ok(())
    }
}
