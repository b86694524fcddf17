use std::sync::Arc;

use taskboard_api::TaskApi;
use taskboard_core::TaskboardResult;
use taskboard_domain::{CreateTaskRequest, Task, TaskDraft, TaskId, TaskStatus, UpdateTaskRequest};

/// Applies user mutations to the live task collection and reconciles them
/// with the remote store.
///
/// Move and delete mutate locally before the network call and roll back to a
/// whole-collection snapshot when it fails; update and create touch the
/// collection only after the remote store confirms. The asymmetry is
/// deliberate: drag and delete are latency-sensitive gestures with cheap
/// rollback, while update and create run inside a form where a short wait
/// avoids displaying field values the server has not accepted.
pub struct MutationEngine<A> {
    api: Arc<A>,
}

impl<A: TaskApi> MutationEngine<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Optimistic status move. On failure the snapshot is restored verbatim
    /// and the error returned for the caller to surface.
    pub async fn move_task(
        &self,
        tasks: &mut Vec<Task>,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskboardResult<()> {
        let snapshot = tasks.clone();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.set_status(status);
        }

        tracing::debug!(task_id = id, status = status.as_str(), "moving task");
        match self.api.update_task(id, UpdateTaskRequest::status(status)).await {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!(task_id = id, %err, "move rejected, restoring snapshot");
                *tasks = snapshot;
                Err(err)
            }
        }
    }

    /// Conservative content edit: the matching task is patched only after
    /// the remote store accepts the new fields.
    pub async fn update_fields(
        &self,
        tasks: &mut [Task],
        id: TaskId,
        draft: &TaskDraft,
    ) -> TaskboardResult<()> {
        tracing::debug!(task_id = id, "updating task fields");
        self.api
            .update_task(id, UpdateTaskRequest::fields(draft))
            .await?;

        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.title = draft.title.clone();
            task.description = draft.description.clone();
        }
        Ok(())
    }

    /// Conservative create: the collection grows only by the record the
    /// server returns.
    pub async fn create_task(
        &self,
        tasks: &mut Vec<Task>,
        draft: &TaskDraft,
        user_id: i64,
    ) -> TaskboardResult<Task> {
        tracing::debug!(title = %draft.title, "creating task");
        let created = self
            .api
            .create_task(CreateTaskRequest::from_draft(draft, user_id))
            .await?;

        tasks.push(created.clone());
        Ok(created)
    }

    /// Optimistic delete. On failure the snapshot restore puts the task back
    /// in its original position.
    pub async fn delete_task(&self, tasks: &mut Vec<Task>, id: TaskId) -> TaskboardResult<()> {
        let snapshot = tasks.clone();
        tasks.retain(|t| t.id != id);

        tracing::debug!(task_id = id, "deleting task");
        match self.api.delete_task(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(task_id = id, %err, "delete rejected, restoring snapshot");
                *tasks = snapshot;
                Err(err)
            }
        }
    }
}
