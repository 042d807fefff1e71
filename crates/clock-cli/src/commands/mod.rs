//! CLI subcommand implementations.
//!
//! Every command returns the full text to print. Failures to reach
//! timewarrior become part of that text, so dispatch itself cannot fail.

pub mod begin;
pub mod help;
pub mod report;
pub mod summary;
mod util;

use crate::cli::{Commands, Invocation};
use crate::timew::Timewarrior;

/// Runs a whole command line: parsed commands are dispatched, anything else
/// goes to timewarrior unchanged.
pub fn run(invocation: &Invocation, timew: &impl Timewarrior) -> String {
    match invocation {
        Invocation::Parsed(cli) => dispatch(cli.command.as_ref(), timew),
        Invocation::Forward(tokens) => {
            tracing::debug!(?tokens, "forwarding arguments clock does not define");
            report::passthrough(tokens, timew)
        }
    }
}

/// Runs one command and returns its output.
///
/// No subcommand at all means the summary view.
pub fn dispatch(command: Option<&Commands>, timew: &impl Timewarrior) -> String {
    let Some(command) = command else {
        return summary::run(&[], timew);
    };
    match command {
        Commands::Help(forward) => help::run(&forward.args, timew),
        Commands::Version => version(),
        Commands::Day(forward) => report::run(report::View::Day, &forward.args, timew),
        Commands::Week(forward) => report::run(report::View::Week, &forward.args, timew),
        Commands::Month(forward) => report::run(report::View::Month, &forward.args, timew),
        Commands::Summary(forward) => summary::run(&forward.args, timew),
        Commands::Begin(forward) => begin::run(&forward.args, timew),
        Commands::External(tokens) => report::passthrough(tokens, timew),
    }
}

pub fn version() -> String {
    format!("clock {}\n", env!("CARGO_PKG_VERSION"))
}
