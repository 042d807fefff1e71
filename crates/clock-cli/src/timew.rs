//! The timewarrior invocation boundary.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// The wrapped program could not be started.
#[derive(Debug, Error)]
#[error("could not run {program}: {source}")]
pub struct InvocationError {
    program: String,
    source: io::Error,
}

impl InvocationError {
    pub fn new(program: impl Into<String>, source: io::Error) -> Self {
        Self {
            program: program.into(),
            source,
        }
    }
}

/// Something that runs `timew <args…>` and returns what it printed.
pub trait Timewarrior {
    fn run(&self, args: &[String]) -> Result<String, InvocationError>;
}

/// Runs timewarrior as a child process.
#[derive(Debug, Clone)]
pub struct TimewCli {
    program: PathBuf,
}

impl TimewCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Timewarrior for TimewCli {
    /// Returns stdout followed by stderr. A non-zero exit status is not an
    /// error: timewarrior explains itself in the captured text.
    fn run(&self, args: &[String]) -> Result<String, InvocationError> {
        tracing::debug!(program = %self.program.display(), ?args, "running timewarrior");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| InvocationError::new(self.program.display().to_string(), source))?;

        if !output.status.success() {
            tracing::debug!(status = %output.status, "timewarrior exited unsuccessfully");
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
