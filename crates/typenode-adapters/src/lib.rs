//! Infrastructure adapters for create-typenode.
//!
//! This crate implements the ports defined in
//! `typenode_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod prompt;
pub mod template_dir;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{NpmInstaller, RecordingInstaller};
pub use prompt::ScriptedPrompt;
pub use template_dir::resolve_template_dir;
