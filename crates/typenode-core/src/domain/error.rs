//! Domain-layer errors.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project name failed the name grammar.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Use only letters, numbers, hyphens, underscores, and dots".into(),
                "Use '.' to scaffold into the current directory".into(),
                "Examples: my-app, my_app, app.v2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
