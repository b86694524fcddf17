use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("no authentication token available")]
    MissingToken,

    #[error("{0}")]
    Remote(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TaskboardError {
    /// A missing token is fatal to the operation that hit it; it is never
    /// retried automatically.
    pub fn is_auth(&self) -> bool {
        matches!(self, TaskboardError::MissingToken)
    }
}
