use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned task identity. Never minted locally, never reused.
pub type TaskId = i64;

/// The four statuses the board renders as columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Closed,
}

impl TaskStatus {
    /// Fixed column order of the board.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(TaskStatus::Pending),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETED" => Some(TaskStatus::Completed),
            "CLOSED" => Some(TaskStatus::Closed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Closed => "Closed",
        }
    }
}

/// Creator snapshot the server denormalizes onto each task for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A task as the remote store returns it.
///
/// `status` keeps the raw server value: a value outside [`TaskStatus::ALL`]
/// still deserializes and simply matches no column. Local writes always go
/// through [`Task::set_status`] with a known status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: TaskUser,
}

impl Task {
    /// The known status this task belongs to, if any.
    pub fn known_status(&self) -> Option<TaskStatus> {
        TaskStatus::parse(&self.status)
    }

    pub fn has_status(&self, status: TaskStatus) -> bool {
        self.status == status.as_str()
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status.as_str().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(id: TaskId, status: &str) -> Task {
        let now = Utc::now();
        Task {
            id,
            title: "Ship the release".to_string(),
            description: "Cut, tag, and publish the release".to_string(),
            status: status.to_string(),
            user_id: 1,
            created_at: now,
            updated_at: now,
            user: TaskUser {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let status: TaskStatus = serde_json::from_str("\"CLOSED\"").unwrap();
        assert_eq!(status, TaskStatus::Closed);
    }

    #[test]
    fn test_parse_round_trips_all_statuses() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("ARCHIVED"), None);
        assert_eq!(TaskStatus::parse("pending"), None);
    }

    #[test]
    fn test_known_status() {
        assert_eq!(
            sample_task(1, "PENDING").known_status(),
            Some(TaskStatus::Pending)
        );
        assert_eq!(sample_task(2, "ARCHIVED").known_status(), None);
    }

    #[test]
    fn test_set_status() {
        let mut task = sample_task(1, "PENDING");
        task.set_status(TaskStatus::InProgress);
        assert!(task.has_status(TaskStatus::InProgress));
        assert!(!task.has_status(TaskStatus::Pending));
    }

    #[test]
    fn test_task_wire_shape() {
        let json = r#"{
            "id": 7,
            "title": "Ship the release",
            "description": "Cut, tag, and publish the release",
            "status": "IN_PROGRESS",
            "userId": 3,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T09:30:00Z",
            "user": { "id": 3, "name": "Ada", "email": "ada@example.com" }
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.user_id, 3);
        assert_eq!(task.known_status(), Some(TaskStatus::InProgress));
        assert_eq!(task.user.email, "ada@example.com");
    }
}
