//! typenode-core - scaffold engine for create-typenode.
//!
//! This crate provides the domain and application layers for the
//! create-typenode project scaffolder, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        typenode-cli (binary)            │
//! │   argument parsing, prompts, output     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! │  inspect → confirm → copy → normalize   │
//! │          → install (soft)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports: Filesystem, Prompt,          │
//! │            Installer                    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   typenode-adapters (infrastructure)    │
//! │  LocalFilesystem, NpmInstaller, ...     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (target resolution, directory-state classification,
//! transform rules, rename plan) is pure and has no knowledge of the ports.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldOutcome, ScaffoldReport, ScaffoldService, ScaffoldWarning,
        ports::{Filesystem, Installer, Prompt},
    };
    pub use crate::domain::{DirectoryState, ProjectName, RenamePlan, TargetLocation};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
