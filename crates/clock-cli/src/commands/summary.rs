//! The summary view, and the default when no command is given.

use clock_core::Pipeline;

use super::util::{capture, command_line};
use crate::timew::Timewarrior;

/// Timewarrior hint that adds annotations to the summary.
pub const ANNOTATIONS_HINT: &str = ":annotations";

pub fn run(args: &[String], timew: &impl Timewarrior) -> String {
    let annotations = args.iter().any(|arg| arg == ANNOTATIONS_HINT);
    let output = capture(timew, &command_line("summary", args));
    Pipeline::summary(annotations).run(&output)
}
