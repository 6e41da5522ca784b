//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use typenode_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one handle to the service and
/// keep another for assertions. It can also be told to fail writes under a
/// chosen prefix, which is how copy-failure and rollback paths are
/// exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    fail_writes_under: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Seed a file, creating parent directories implicitly (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// Seed an empty directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.into().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Make every subsequent write under `prefix` fail (testing helper).
    pub fn fail_writes_under(&self, prefix: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_writes_under = Some(prefix.into());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "directory does not exist".into(),
            }
            .into());
        }

        let mut entries = Vec::new();
        for dir in &inner.directories {
            if dir.parent() == Some(path) {
                if let Some(name) = dir.file_name() {
                    entries.push(DirEntry {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::Directory,
                    });
                }
            }
        }
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                if let Some(name) = file.file_name() {
                    entries.push(DirEntry {
                        name: name.to_string_lossy().into_owned(),
                        kind: EntryKind::File,
                    });
                }
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if let Some(prefix) = &inner.fail_writes_under {
            if path.starts_with(prefix) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "injected write failure".into(),
                }
                .into());
            }
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(from))?;
        let content = inner.files.remove(from).ok_or_else(|| {
            typenode_core::error::ScaffoldError::from(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "file does not exist".into(),
            })
        })?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.files.remove(path).map(|_| ()).ok_or_else(|| {
            typenode_core::error::ScaffoldError::from(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            })
        })
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn lock_error(path: &Path) -> typenode_core::error::ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}
