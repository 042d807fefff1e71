//! Shared utilities for CLI commands.

use crate::timew::Timewarrior;

/// `command` followed by `args`, as one timewarrior argument list.
pub fn command_line(command: &str, args: &[String]) -> Vec<String> {
    std::iter::once(command.to_string())
        .chain(args.iter().cloned())
        .collect()
}

/// Runs timewarrior, turning a failure to start it into a one-line message.
pub fn capture(timew: &impl Timewarrior, args: &[String]) -> String {
    match timew.run(args) {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(error = %err, "timewarrior invocation failed");
            format!("Error: {err}\n")
        }
    }
}
