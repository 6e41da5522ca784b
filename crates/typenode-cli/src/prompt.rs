//! Interactive stdin prompt.
//!
//! Implements the core `Prompt` port with plain line-based reads so the
//! binary works identically on a TTY and with piped stdin (which is how the
//! integration tests drive it).  No raw-mode terminal handling: an EOF or
//! read failure surfaces as an error, and the orchestrator treats that as a
//! declined answer.

use std::io::{self, Write as _};
use std::path::PathBuf;

use typenode_core::{
    application::{ApplicationError, ports::Prompt},
    error::ScaffoldResult,
};

/// Line-based prompt over the process's real stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> ScaffoldResult<String> {
        io::stdout().flush().map_err(stdin_error)?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line).map_err(stdin_error)?;
        if bytes == 0 {
            // EOF: stdin closed before an answer arrived.
            return Err(stdin_error(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl Prompt for StdinPrompt {
    fn input(&self, message: &str, default: &str) -> ScaffoldResult<String> {
        print!("{message} ({default}): ");
        let answer = self.read_line()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn confirm(&self, question: &str) -> ScaffoldResult<bool> {
        print!("{question} [y/N] ");
        let answer = self.read_line()?.to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

fn stdin_error(e: io::Error) -> typenode_core::error::ScaffoldError {
    ApplicationError::FilesystemError {
        path: PathBuf::from("/dev/stdin"),
        reason: e.to_string(),
    }
    .into()
}
