//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Only fatal failures live here. Normalization and installer problems are
//! soft by design and modeled as [`ScaffoldWarning`] values collected in the
//! scaffold report instead of errors crossing component boundaries.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template tree could not be found at its expected location.
    #[error("template directory not found at {path}")]
    TemplateMissing { path: PathBuf },

    /// The resolved target already exists (naming conflict).
    #[error("directory '{path}' already exists")]
    ProjectExists { path: PathBuf },

    /// An I/O failure while transplanting the template tree. Fatal; aborts
    /// the remaining traversal and triggers rollback of a freshly created
    /// target directory.
    #[error("copy failed at {path}: {reason}")]
    CopyFailed { path: PathBuf, reason: String },

    /// A filesystem port operation failed outside the copy phase.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { path } => vec![
                format!("Expected the template at: {}", path.display()),
                "Reinstall create-typenode; the template ships alongside the binary".into(),
                "Or point CREATE_TYPENODE_TEMPLATE_DIR at a template tree".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::CopyFailed { path, .. } => vec![
                format!("Failed while writing: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have permissions for this location".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::Configuration,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::CopyFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}

/// The installer subprocess failed to launch or exited non-zero.
///
/// Deliberately not a variant of [`ApplicationError`]: install failures are
/// never fatal. The orchestrator converts this into
/// [`ScaffoldWarning::Install`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct InstallError {
    pub reason: String,
}

impl InstallError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

// ── Soft failures ─────────────────────────────────────────────────────────────

/// A non-fatal problem recorded during a scaffold run.
///
/// The orchestrator collects these and the CLI reports them at the end;
/// none of them stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum ScaffoldWarning {
    /// A post-copy rename failed. The project is structurally valid without
    /// it, so the run continues.
    Normalize {
        from: String,
        to: String,
        reason: String,
    },

    /// The dependency installer exited non-zero or could not be launched.
    Install { reason: String },
}

impl ScaffoldWarning {
    /// The manual remedy to show the user, if one exists.
    pub fn remedy(&self) -> Option<String> {
        match self {
            Self::Normalize { from, to, .. } => {
                Some(format!("Rename '{from}' to '{to}' by hand"))
            }
            Self::Install { .. } => {
                Some("Install dependencies manually by running: npm install".into())
            }
        }
    }
}

impl fmt::Display for ScaffoldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normalize { from, to, reason } => {
                write!(f, "could not rename '{from}' to '{to}': {reason}")
            }
            Self::Install { reason } => write!(f, "dependency installation failed: {reason}"),
        }
    }
}
