//! Per-file content transformation rules applied during the tree copy.
//!
//! Exactly one built-in rule exists: the template's `package.json` carries a
//! placeholder package identifier that must become the resolved project
//! name. Every other file is copied byte-for-byte. Rules match on the exact
//! filename; at most one rule applies per file and rules do not compose.

use std::borrow::Cow;

/// The package identifier the template ships with.
pub const PACKAGE_NAME_PLACEHOLDER: &str = "\"name\": \"create-typenode\"";

/// The filename the built-in rule matches.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// The set of content-rewrite rules for one scaffold run.
///
/// Holds the resolved project name; in current-directory mode the caller
/// passes the basename of the working directory.
#[derive(Debug, Clone)]
pub struct TransformRules {
    project_name: String,
}

impl TransformRules {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Apply the matching rule, if any, to a file's content.
    ///
    /// Returns `Cow::Borrowed` for the untransformed common case so plain
    /// files do not pay for an allocation.
    pub fn apply<'a>(&self, file_name: &str, content: &'a str) -> Cow<'a, str> {
        if file_name == PACKAGE_MANIFEST && content.contains(PACKAGE_NAME_PLACEHOLDER) {
            let replacement = format!("\"name\": \"{}\"", self.project_name);
            Cow::Owned(content.replacen(PACKAGE_NAME_PLACEHOLDER, &replacement, 1))
        } else {
            Cow::Borrowed(content)
        }
    }
}
