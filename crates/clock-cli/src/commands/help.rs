//! Timewarrior's help, under clock's name.

use clock_core::Pipeline;

use super::util::{capture, command_line};
use crate::timew::Timewarrior;

/// Appended to the command list of the top-level help.
pub const BEGIN_SYNOPSIS: &str =
    r#"       clock begin <tags> "<annotation>"  (new: start timer with annotation)"#;

pub fn run(args: &[String], timew: &impl Timewarrior) -> String {
    let output = capture(timew, &command_line("help", args));
    let output = Pipeline::help().run(&output);
    if !args.is_empty() {
        return output;
    }
    format!("{}\n{BEGIN_SYNOPSIS}\n", output.trim_end_matches('\n'))
}
