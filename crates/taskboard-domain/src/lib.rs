pub mod draft;
pub mod dto;
pub mod partition;
pub mod task;
pub mod user;

pub use draft::{DraftErrors, TaskDraft};
pub use dto::{CreateTaskRequest, UpdateTaskRequest};
pub use partition::{tasks_by_status, BoardColumns};
pub use task::{Task, TaskId, TaskStatus, TaskUser};
pub use user::{ApiErrorBody, AuthResponse, Credentials, Registration, UserProfile, UserRole};
