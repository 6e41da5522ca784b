//! Application layer: orchestration and ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, InstallError, ScaffoldWarning};
pub use services::{ScaffoldOptions, ScaffoldOutcome, ScaffoldReport, ScaffoldService};
