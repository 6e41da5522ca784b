//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use typenode_core::{
    application::ports::{DirEntry, EntryKind, Filesystem},
    error::ScaffoldResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        let iter = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        for entry in iter {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "read file type"))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntry { name, kind });
        }
        // Stable traversal order keeps runs deterministic across platforms.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> ScaffoldResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }

    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> typenode_core::error::ScaffoldError {
    use typenode_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}
