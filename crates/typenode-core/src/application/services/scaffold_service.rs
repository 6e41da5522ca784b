//! Scaffold service - the orchestrator for one scaffold run.
//!
//! Sequences the whole workflow:
//! 1. Resolve and validate the target location
//! 2. Inspect the destination's on-disk state
//! 3. Confirm with the user when scaffolding into a non-empty directory
//! 4. Transplant the template tree (with content transforms)
//! 5. Normalize placeholder filenames (best-effort)
//! 6. Invoke the dependency installer (best-effort)
//!
//! The copy phase runs inside a failure boundary: if the target directory
//! was created by this run, any copy failure rolls it back before the error
//! propagates. Current-directory targets are never rolled back — deleting
//! the user's working directory is not an acceptable cleanup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        error::{ApplicationError, ScaffoldWarning},
        ports::{EntryKind, Filesystem, Installer, Prompt},
    },
    domain::{DirectoryState, RenamePlan, TargetLocation, TransformRules},
    error::{ScaffoldError, ScaffoldResult},
};

/// Per-run options the CLI resolves from flags and config.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Root of the template tree to transplant.
    pub template_root: PathBuf,
    /// Skip the non-empty-directory confirmation.
    pub assume_yes: bool,
    /// Skip the installer invocation entirely.
    pub skip_install: bool,
}

/// How a scaffold run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The project was created. Warnings, if any, are soft failures the
    /// caller should surface.
    Created(ScaffoldReport),
    /// The user declined the confirmation. Nothing was modified.
    Cancelled,
}

/// Summary of a completed scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub target_path: PathBuf,
    pub project_name: String,
    pub is_current_dir: bool,
    pub state: DirectoryState,
    pub warnings: Vec<ScaffoldWarning>,
}

/// Main scaffolding service.
///
/// Owns the driven ports; the CLI wires in concrete adapters.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn Prompt>,
    installer: Box<dyn Installer>,
}

impl ScaffoldService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn Prompt>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            filesystem,
            prompt,
            installer,
        }
    }

    /// Run one scaffold from an already-resolved target location.
    #[instrument(
        skip_all,
        fields(
            target = %target,
            project = %target.project_name(),
        )
    )]
    pub fn scaffold(
        &self,
        target: &TargetLocation,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult<ScaffoldOutcome> {
        if !self.filesystem.exists(&options.template_root) {
            return Err(ApplicationError::TemplateMissing {
                path: options.template_root.clone(),
            }
            .into());
        }

        // ── Inspect ───────────────────────────────────────────────────────
        let state = self.classify_target(target)?;
        debug!(state = %state, "Target inspected");

        match state {
            DirectoryState::AlreadyExists => {
                return Err(ApplicationError::ProjectExists {
                    path: target.path().to_path_buf(),
                }
                .into());
            }
            DirectoryState::CurrentNonEmpty if !options.assume_yes => {
                if !self.confirm_nonempty(target) {
                    info!("Cancelled at confirmation prompt");
                    return Ok(ScaffoldOutcome::Cancelled);
                }
            }
            _ => {}
        }

        // ── Copy (with rollback boundary) ─────────────────────────────────
        let created_dir = !target.is_current_dir();
        if created_dir {
            self.filesystem
                .create_dir_all(target.path())
                .map_err(|e| copy_error(target.path(), &e))?;
        }

        let rules = TransformRules::new(target.project_name());
        if let Err(e) = self.transplant(&options.template_root, target.path(), &rules) {
            if created_dir {
                warn!("Copy failed, rolling back created directory");
                self.rollback(target.path());
            } else {
                warn!("Copy failed in current directory; partial files left in place");
            }
            return Err(e);
        }
        info!("Template tree copied");

        // ── Normalize + install (soft failures only) ──────────────────────
        let mut warnings = self.normalize(target.path(), &RenamePlan::builtin());

        if options.skip_install {
            debug!("Installer skipped by request");
        } else if let Err(e) = self.installer.install(target.path()) {
            warn!(error = %e, "Dependency installation failed");
            warnings.push(ScaffoldWarning::Install {
                reason: e.reason,
            });
        } else {
            info!("Dependencies installed");
        }

        Ok(ScaffoldOutcome::Created(ScaffoldReport {
            target_path: target.path().to_path_buf(),
            project_name: target.project_name().to_string(),
            is_current_dir: target.is_current_dir(),
            state,
            warnings,
        }))
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Classify the destination's state. Read-only.
    ///
    /// The existence check for non-current targets and the later directory
    /// creation are not atomic; a concurrent process creating the path in
    /// between is an accepted, unhandled race.
    fn classify_target(&self, target: &TargetLocation) -> ScaffoldResult<DirectoryState> {
        if !target.is_current_dir() {
            return Ok(if self.filesystem.exists(target.path()) {
                DirectoryState::AlreadyExists
            } else {
                DirectoryState::Absent
            });
        }

        let entries = self.filesystem.read_dir(target.path())?;
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        Ok(DirectoryState::of_current_dir_entries(&names))
    }

    /// Ask before mixing template files into a non-empty directory.
    ///
    /// A prompt transport error (closed stdin, interrupt) counts as "no".
    fn confirm_nonempty(&self, target: &TargetLocation) -> bool {
        let question = format!(
            "Current directory \"{}\" is not empty. Contents will be mixed with template files. Continue anyway?",
            target.project_name()
        );
        match self.prompt.confirm(&question) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed; treating as decline");
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Copy
    // -------------------------------------------------------------------------

    /// Depth-first copy of the template tree.
    ///
    /// Directories are created idempotently (the current-directory merge case
    /// may find them already present). Files are read in full, run through
    /// the transform rules, and written with silent overwrite. The first
    /// failing operation aborts the traversal.
    fn transplant(
        &self,
        src: &Path,
        dest: &Path,
        rules: &TransformRules,
    ) -> ScaffoldResult<()> {
        let entries = self
            .filesystem
            .read_dir(src)
            .map_err(|e| copy_error(src, &e))?;

        for entry in entries {
            let src_path = src.join(&entry.name);
            let dest_path = dest.join(&entry.name);

            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem
                        .create_dir_all(&dest_path)
                        .map_err(|e| copy_error(&dest_path, &e))?;
                    self.transplant(&src_path, &dest_path, rules)?;
                }
                EntryKind::File => {
                    let content = self
                        .filesystem
                        .read_to_string(&src_path)
                        .map_err(|e| copy_error(&src_path, &e))?;
                    let rendered = rules.apply(&entry.name, &content);
                    self.filesystem
                        .write_file(&dest_path, &rendered)
                        .map_err(|e| copy_error(&dest_path, &e))?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback of a directory this run created.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }

    // -------------------------------------------------------------------------
    // Normalize
    // -------------------------------------------------------------------------

    /// Apply the rename plan at the target root. Never fails.
    ///
    /// Each pair is independent: skipped silently when the placeholder is
    /// absent or the real name already exists, attempted via atomic rename
    /// otherwise, with a read-write-delete fallback. Failures become
    /// warnings. Idempotent: a second pass over the same tree is a no-op.
    pub fn normalize(&self, root: &Path, plan: &RenamePlan) -> Vec<ScaffoldWarning> {
        let mut warnings = Vec::new();

        for pair in plan.pairs() {
            let from = root.join(pair.from);
            let to = root.join(pair.to);

            if !self.filesystem.exists(&from) || self.filesystem.exists(&to) {
                continue;
            }

            if self.filesystem.rename(&from, &to).is_ok() {
                debug!(from = pair.from, to = pair.to, "Renamed placeholder file");
                continue;
            }

            // Fallback for filesystems where rename is unsupported: copy the
            // content exactly, then drop the source.
            let fallback = self
                .filesystem
                .read_to_string(&from)
                .and_then(|content| self.filesystem.write_file(&to, &content))
                .and_then(|()| self.filesystem.remove_file(&from));

            if let Err(e) = fallback {
                warn!(from = pair.from, to = pair.to, error = %e, "Rename failed");
                warnings.push(ScaffoldWarning::Normalize {
                    from: pair.from.to_string(),
                    to: pair.to.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        warnings
    }
}

fn copy_error(path: &Path, source: &ScaffoldError) -> ScaffoldError {
    ApplicationError::CopyFailed {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
