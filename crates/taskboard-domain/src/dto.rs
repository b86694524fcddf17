use serde::{Deserialize, Serialize};

use crate::draft::TaskDraft;
use crate::task::TaskStatus;

/// Body of a task creation call. The server assigns id, timestamps, and the
/// initial PENDING status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

impl CreateTaskRequest {
    pub fn from_draft(draft: &TaskDraft, user_id: i64) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            user_id,
        }
    }
}

/// Partial update body; absent fields are omitted from the wire entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// A status-only move, as the drag-and-drop path sends.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// A content-only edit, as the edit form sends.
    pub fn fields(draft: &TaskDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone()),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_update_omits_content_fields() {
        let body = serde_json::to_string(&UpdateTaskRequest::status(TaskStatus::InProgress))
            .unwrap();
        assert_eq!(body, r#"{"status":"IN_PROGRESS"}"#);
    }

    #[test]
    fn test_fields_update_omits_status() {
        let draft = TaskDraft::new("New title", "A longer new description");
        let body = serde_json::to_string(&UpdateTaskRequest::fields(&draft)).unwrap();
        assert_eq!(
            body,
            r#"{"title":"New title","description":"A longer new description"}"#
        );
    }

    #[test]
    fn test_create_request_wire_shape() {
        let draft = TaskDraft::new("New title", "A longer new description");
        let body = serde_json::to_string(&CreateTaskRequest::from_draft(&draft, 4)).unwrap();
        assert_eq!(
            body,
            r#"{"title":"New title","description":"A longer new description","userId":4}"#
        );
    }
}
