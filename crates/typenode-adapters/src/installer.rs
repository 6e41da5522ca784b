//! Dependency installer adapters.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::{info, instrument};

use typenode_core::application::{error::InstallError, ports::Installer};

/// Runs `npm install` in the project directory with inherited stdio.
///
/// No timeout is imposed: the subprocess runs to completion or failure and
/// a hang in npm hangs the scaffold run. Any non-zero exit or launch
/// failure is reported to the orchestrator, which treats it as a soft
/// failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }

    fn npm_program() -> &'static str {
        // On Windows npm is a .cmd shim, not an executable.
        if cfg!(windows) { "npm.cmd" } else { "npm" }
    }
}

impl Installer for NpmInstaller {
    #[instrument(skip_all, fields(dir = %project_dir.display()))]
    fn install(&self, project_dir: &Path) -> Result<(), InstallError> {
        info!("Running npm install");

        let status = Command::new(Self::npm_program())
            .arg("install")
            .current_dir(project_dir)
            .status()
            .map_err(|e| InstallError::new(format!("could not launch npm: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::new(format!("npm install exited with {status}")))
        }
    }
}

/// Test double that records install requests instead of running anything.
///
/// Clones share the call log, so a test can box one handle into the
/// service and assert on another.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    fail_with: Option<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// An installer that always fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    /// The project directories install was requested for, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, project_dir: &Path) -> Result<(), InstallError> {
        self.calls.lock().unwrap().push(project_dir.to_path_buf());
        match &self.fail_with {
            Some(reason) => Err(InstallError::new(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_installer_captures_path() {
        let installer = RecordingInstaller::new();
        installer.install(Path::new("/work/proj")).unwrap();
        assert_eq!(installer.calls(), vec![PathBuf::from("/work/proj")]);
    }

    #[test]
    fn failing_installer_reports_reason() {
        let installer = RecordingInstaller::failing("exit status 1");
        let err = installer.install(Path::new("/work/proj")).unwrap_err();
        assert_eq!(err.reason, "exit status 1");
    }
}
