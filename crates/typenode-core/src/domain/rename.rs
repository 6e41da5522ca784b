//! Post-copy rename plan.
//!
//! Some generated files cannot exist under their real name inside the
//! template source — npm refuses to publish a literal `.gitignore`, so the
//! template ships it as `gitignore` and the scaffolder renames it after the
//! copy. The plan is a fixed list of (placeholder, real) pairs and each
//! rename is independently best-effort.

/// A fixed list of post-copy renames, applied at the target root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pairs: Vec<RenamePair>,
}

/// One placeholder-name to real-name mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub from: &'static str,
    pub to: &'static str,
}

impl RenamePlan {
    /// The built-in plan: `gitignore` → `.gitignore`.
    pub fn builtin() -> Self {
        Self {
            pairs: vec![RenamePair {
                from: "gitignore",
                to: ".gitignore",
            }],
        }
    }

    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }
}

impl Default for RenamePlan {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_plan_renames_gitignore() {
        let plan = RenamePlan::builtin();
        assert_eq!(plan.pairs().len(), 1);
        assert_eq!(plan.pairs()[0].from, "gitignore");
        assert_eq!(plan.pairs()[0].to, ".gitignore");
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(RenamePlan::default(), RenamePlan::builtin());
    }
}
