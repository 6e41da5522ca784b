//! Scripted prompt adapter for testing.
//!
//! The production prompt lives in the CLI crate (it owns the terminal);
//! this adapter answers from a pre-loaded script so orchestrator flows can
//! be driven without a TTY.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use typenode_core::{
    application::{ApplicationError, ports::Prompt},
    error::ScaffoldResult,
};

/// A prompt that replays queued answers in order.
///
/// Running out of answers is an error, mirroring a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// A prompt with no answers; any question fails like a closed stdin.
    pub fn closed() -> Self {
        Self::default()
    }

    fn next_answer(&self) -> ScaffoldResult<String> {
        self.answers
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: PathBuf::from("<scripted prompt>"),
                    reason: "no scripted answer left".into(),
                }
                .into()
            })
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&self, _message: &str, default: &str) -> ScaffoldResult<String> {
        let answer = self.next_answer()?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.trim().to_string())
        }
    }

    fn confirm(&self, _question: &str) -> ScaffoldResult<bool> {
        let answer = self.next_answer()?;
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_accepts_y_and_yes_only() {
        let prompt = ScriptedPrompt::new(["y", "yes", "n", "", "sure"]);
        assert!(prompt.confirm("?").unwrap());
        assert!(prompt.confirm("?").unwrap());
        assert!(!prompt.confirm("?").unwrap());
        assert!(!prompt.confirm("?").unwrap());
        assert!(!prompt.confirm("?").unwrap());
    }

    #[test]
    fn input_falls_back_to_default_on_empty() {
        let prompt = ScriptedPrompt::new(["", "my-app"]);
        assert_eq!(prompt.input("?", "typenode-project").unwrap(), "typenode-project");
        assert_eq!(prompt.input("?", "typenode-project").unwrap(), "my-app");
    }

    #[test]
    fn exhausted_script_errors() {
        let prompt = ScriptedPrompt::closed();
        assert!(prompt.confirm("?").is_err());
    }
}
