//! Target location resolution: where does the project go?
//!
//! # Design
//!
//! These are pure value types. [`TargetLocation::resolve`] is a function of
//! its inputs only — the working directory is an explicit parameter, never
//! read from ambient process state, so the policy is testable without
//! touching the real filesystem.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The single-character sentinel meaning "use the current directory".
pub const CURRENT_DIR_SENTINEL: &str = ".";

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: non-empty and every character is in `[A-Za-z0-9-_.]`. The
/// `"."` sentinel is handled before this type is constructed — a bare dot
/// is not a `ProjectName`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_allowed_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: s.to_string(),
                reason: "name cannot be empty".into(),
            });
        }
        if let Some(bad) = trimmed.chars().find(|c| !Self::is_allowed_char(*c)) {
            return Err(DomainError::InvalidProjectName {
                name: trimmed.to_string(),
                reason: format!(
                    "character '{bad}' is not allowed; names must match [A-Za-z0-9-_.]+"
                ),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

// ── TargetLocation ────────────────────────────────────────────────────────────

/// A resolved scaffold destination.
///
/// Invariant: when `is_current_dir` is true the path equals the working
/// directory that was passed to [`TargetLocation::resolve`]; otherwise it is
/// `working_dir/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    path: PathBuf,
    /// The name that substitutions should use. For current-directory runs
    /// this is the basename of the working directory, not a user-typed name.
    project_name: String,
    is_current_dir: bool,
}

impl TargetLocation {
    /// Resolve raw user input into a target location.
    ///
    /// `"."` unconditionally selects current-directory mode. Anything else
    /// must pass the [`ProjectName`] grammar.
    pub fn resolve(raw: &str, working_dir: &Path) -> Result<Self, DomainError> {
        let raw = raw.trim();

        if raw == CURRENT_DIR_SENTINEL {
            let project_name = working_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("typenode-project")
                .to_string();
            return Ok(Self {
                path: working_dir.to_path_buf(),
                project_name,
                is_current_dir: true,
            });
        }

        let name: ProjectName = raw.parse()?;
        Ok(Self {
            path: working_dir.join(name.as_str()),
            project_name: name.as_str().to_string(),
            is_current_dir: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The name to substitute into generated files.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn is_current_dir(&self) -> bool {
        self.is_current_dir
    }
}

impl fmt::Display for TargetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current_dir {
            f.write_str("current directory")
        } else {
            write!(f, "{}", self.path.display())
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
