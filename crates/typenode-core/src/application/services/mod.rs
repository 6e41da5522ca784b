//! Application services.

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldOptions, ScaffoldOutcome, ScaffoldReport, ScaffoldService};
