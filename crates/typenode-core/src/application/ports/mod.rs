//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `typenode-adapters` (and the
//! CLI crate for the prompt) implement these.
//!
//! ## Port Types
//!
//! - `Filesystem`: template reads and target writes
//! - `Prompt`: the interactive line-based question transport
//! - `Installer`: the dependency-installer subprocess boundary

use std::path::Path;

use crate::application::error::InstallError;
use crate::error::ScaffoldResult;

/// The kind of an entry returned by [`Filesystem::read_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `typenode_adapters::filesystem::LocalFilesystem` (production)
/// - `typenode_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Template files are text; contents travel as `String`. The template tree
/// is read-only through this port — the scaffolder never writes under the
/// template root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// List the immediate entries of a directory.
    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>>;

    /// Read a file's full content.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write content to a file, overwriting silently.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Atomically rename a file. May fail (e.g. cross-filesystem); callers
    /// that need best-effort semantics fall back to copy-then-delete.
    fn rename(&self, from: &Path, to: &Path) -> ScaffoldResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ScaffoldResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Port for the interactive prompt transport.
///
/// The core asks at most two things per run: a free-text location string
/// (done at the CLI layer before the orchestrator starts) and a yes/no
/// confirmation. A transport error — closed stdin, interrupt — is treated
/// by the orchestrator as a non-affirmative answer.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send + Sync {
    /// Ask a free-text question; an empty answer yields `default`.
    fn input(&self, message: &str, default: &str) -> ScaffoldResult<String>;

    /// Ask a yes/no question. Default is "no".
    fn confirm(&self, question: &str) -> ScaffoldResult<bool>;
}

/// Port for the dependency-installer subprocess.
///
/// The orchestrator hands over one absolute path and treats any error as a
/// soft failure. No timeout is imposed; a hang in the installer hangs the
/// run.
#[cfg_attr(test, mockall::automock)]
pub trait Installer: Send + Sync {
    /// Install dependencies into `project_dir`, blocking until done.
    fn install(&self, project_dir: &Path) -> Result<(), InstallError>;
}
