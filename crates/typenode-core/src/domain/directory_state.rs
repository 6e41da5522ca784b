//! Classification of the scaffold destination's on-disk state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entries that do not make a current directory "non-empty".
///
/// Hidden entries are tolerated separately (anything starting with `.`);
/// these are the visible names we also ignore.
pub const TOLERATED_ENTRIES: &[&str] = &["node_modules", "README.md", "LICENSE", ".gitignore"];

/// The state of a scaffold destination, computed fresh each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryState {
    /// Non-current target that does not exist yet.
    Absent,
    /// Current directory with nothing but tolerated entries in it.
    CurrentEmpty,
    /// Current directory holding real content.
    CurrentNonEmpty,
    /// Non-current target already present on disk (file or directory).
    AlreadyExists,
}

impl DirectoryState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::CurrentEmpty => "current-empty",
            Self::CurrentNonEmpty => "current-nonempty",
            Self::AlreadyExists => "already-exists",
        }
    }

    /// Classify a current-directory target from its immediate entry names.
    ///
    /// Pure so it can be tested without a filesystem; the scaffold service
    /// feeds it the listing it read through the `Filesystem` port.
    pub fn of_current_dir_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let blocking = entries.iter().any(|e| {
            let name = e.as_ref();
            !name.starts_with('.') && !TOLERATED_ENTRIES.contains(&name)
        });
        if blocking {
            Self::CurrentNonEmpty
        } else {
            Self::CurrentEmpty
        }
    }
}

impl fmt::Display for DirectoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
