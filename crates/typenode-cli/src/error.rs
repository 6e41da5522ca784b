//! Error handling for the create-typenode CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use typenode_core::error::ScaffoldError;

// Re-export so callers only need `use crate::error::*`.
pub use typenode_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `typenode-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] ScaffoldError),

    /// An I/O operation failed at the CLI layer.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Run cancelled by the user (declined prompt, closed stdin).  Maps to
    /// exit code 0: nothing was written, nothing went wrong.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Deliberately coarse: a cancelled run exits 0 (the user got what they
    /// asked for), every fatal error exits 1.  Scripts that care about the
    /// failure kind should parse stderr, not the code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            _ => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, cancellation).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use typenode_core::application::ApplicationError;
    use typenode_core::domain::DomainError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn core_name_error_suggestions_flow_through() {
        let err = CliError::Core(
            DomainError::InvalidProjectName {
                name: "bad name".into(),
                reason: "space".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("letters")));
    }

    #[test]
    fn conflict_suggests_a_different_name() {
        let err = CliError::Core(
            ApplicationError::ProjectExists {
                path: PathBuf::from("/tmp/test"),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("different")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn cancelled_exits_zero() {
        assert_eq!(CliError::Cancelled.exit_code(), 0);
    }

    #[test]
    fn everything_else_exits_one() {
        let io_err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(io_err.exit_code(), 1);

        let cfg_err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(cfg_err.exit_code(), 1);

        let core_err = CliError::Core(
            ApplicationError::TemplateMissing {
                path: PathBuf::from("/t"),
            }
            .into(),
        );
        assert_eq!(core_err.exit_code(), 1);
    }

    // ── categories ────────────────────────────────────────────────────────

    #[test]
    fn validation_errors_are_user_errors() {
        let err = CliError::Core(
            DomainError::InvalidProjectName {
                name: "x y".into(),
                reason: "space".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn missing_template_is_a_configuration_error() {
        let err = CliError::Core(
            ApplicationError::TemplateMissing {
                path: PathBuf::from("/t"),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Core(
            ApplicationError::ProjectExists {
                path: PathBuf::from("/tmp/x"),
            }
            .into(),
        );
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Cancelled;
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
