//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// There are no subcommands: `create-typenode` does exactly one thing, so
/// the project name is a plain positional argument.
#[derive(Debug, Parser)]
#[command(
    name    = "create-typenode",
    bin_name = "create-typenode",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a TypeScript + Node.js project",
    long_about = "create-typenode copies a ready-to-run TypeScript + Node.js \
                  starter into a new directory (or the current one) and \
                  installs its dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 create-typenode my-app\n\
        \x20 create-typenode .              # scaffold into the current directory\n\
        \x20 create-typenode my-app --yes --skip-install\n\
        \x20 create-typenode                # prompt for a name",
)]
pub struct Cli {
    /// Project name, or `.` for the current directory.  Omitted: prompt.
    #[arg(value_name = "NAME", help = "Project name, or '.' for the current directory")]
    pub name: Option<String>,

    /// Skip the non-empty-directory confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Answer yes to the non-empty-directory confirmation"
    )]
    pub yes: bool,

    /// Do not run `npm install` after copying the template.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_optional() {
        let cli = Cli::parse_from(["create-typenode"]);
        assert!(cli.name.is_none());
    }

    #[test]
    fn positional_name_is_captured() {
        let cli = Cli::parse_from(["create-typenode", "my-app"]);
        assert_eq!(cli.name.as_deref(), Some("my-app"));
    }

    #[test]
    fn dot_is_a_valid_positional() {
        let cli = Cli::parse_from(["create-typenode", "."]);
        assert_eq!(cli.name.as_deref(), Some("."));
    }

    #[test]
    fn flags_parse_together() {
        let cli = Cli::parse_from(["create-typenode", "my-app", "-y", "--skip-install"]);
        assert!(cli.yes);
        assert!(cli.skip_install);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["create-typenode", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
