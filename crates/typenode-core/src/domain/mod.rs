//! Domain layer: pure value types and policies.
//!
//! Nothing in this module performs I/O. The working directory, directory
//! listings, and file contents all arrive as explicit parameters so every
//! policy here is testable in isolation.

pub mod directory_state;
pub mod error;
pub mod location;
pub mod rename;
pub mod transform;

pub use directory_state::{DirectoryState, TOLERATED_ENTRIES};
pub use error::{DomainError, ErrorCategory};
pub use location::{CURRENT_DIR_SENTINEL, ProjectName, TargetLocation};
pub use rename::{RenamePair, RenamePlan};
pub use transform::{PACKAGE_MANIFEST, PACKAGE_NAME_PLACEHOLDER, TransformRules};
