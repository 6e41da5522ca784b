//! Locating the colocated template tree.
//!
//! The template ships next to the installed binary as a `template/`
//! directory; it is a versioned asset, not something this tool generates.
//! Resolution order:
//!
//! 1. `CREATE_TYPENODE_TEMPLATE_DIR` environment variable
//! 2. An explicit override (from config or flags)
//! 3. `template/` beside the current executable
//! 4. `template/` under the workspace root (development builds)

use std::path::PathBuf;

use tracing::debug;

/// Environment variable overriding the template location.
pub const TEMPLATE_DIR_ENV: &str = "CREATE_TYPENODE_TEMPLATE_DIR";

/// Resolve the template root to hand to the scaffold service.
///
/// An override (environment variable, then config) is authoritative: it is
/// returned as-is even when it does not exist, so the service can report a
/// missing template with the path the user actually asked for. Only the
/// built-in locations are checked for existence.
pub fn resolve_template_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Ok(from_env) = std::env::var(TEMPLATE_DIR_ENV) {
        debug!(path = %from_env, "Template directory taken from environment");
        return PathBuf::from(from_env);
    }
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Template directory taken from config");
        return path;
    }

    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("template"));
        }
    }
    // Development fallback: the workspace checkout keeps the template two
    // levels above this crate.
    candidates.push(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join("template"),
    );

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "Template directory resolved");
            return candidate.clone();
        }
    }

    // Nothing found: report the expected install-adjacent location.
    candidates.into_iter().next().unwrap_or_else(|| PathBuf::from("template"))
}
