use crate::task::Task;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Title and description as submitted from a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

/// Per-field validation messages, mirroring the form's two fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    /// Checked before any repository call; a draft that fails here never
    /// reaches the network.
    pub fn validate(&self) -> Result<(), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        } else if self.title.chars().count() < TITLE_MIN_CHARS {
            errors.title = Some(format!(
                "Title must be at least {} characters",
                TITLE_MIN_CHARS
            ));
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.title = Some(format!("Title cannot exceed {} characters", TITLE_MAX_CHARS));
        }

        if self.description.trim().is_empty() {
            errors.description = Some("Description is required".to_string());
        } else if self.description.chars().count() < DESCRIPTION_MIN_CHARS {
            errors.description = Some(format!(
                "Description must be at least {} characters",
                DESCRIPTION_MIN_CHARS
            ));
        } else if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.description = Some(format!(
                "Description cannot exceed {} characters",
                DESCRIPTION_MAX_CHARS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TaskDraft {
        TaskDraft::new("Fix login", "Users cannot sign in with SSO")
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_minimum_lengths_accepted() {
        let draft = TaskDraft::new("abc", "abcdefghij");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let draft = TaskDraft::new("ab", "a long enough description");
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at least 3 characters")
        );
        assert!(errors.description.is_none());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let draft = TaskDraft::new("   ", "\t\n");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(
            errors.description.as_deref(),
            Some("Description is required")
        );
    }

    #[test]
    fn test_over_length_fields_rejected() {
        let draft = TaskDraft::new("t".repeat(101), "d".repeat(501));
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.title.as_deref(),
            Some("Title cannot exceed 100 characters")
        );
        assert_eq!(
            errors.description.as_deref(),
            Some("Description cannot exceed 500 characters")
        );
    }

    #[test]
    fn test_lengths_counted_in_characters() {
        // 3 multi-byte characters are a valid title.
        let draft = TaskDraft::new("äöü", "ß".repeat(10));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_short_description_rejected() {
        let draft = TaskDraft::new("Fix login", "too short");
        let errors = draft.validate().unwrap_err();
        assert!(errors.title.is_none());
        assert_eq!(
            errors.description.as_deref(),
            Some("Description must be at least 10 characters")
        );
    }
}
