//! Chart views and passthrough: forwarded as is, clock times converted.

use clock_core::Pipeline;

use super::util::{capture, command_line};
use crate::timew::Timewarrior;

/// Timewarrior's chart reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Day,
    Week,
    Month,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

pub fn run(view: View, args: &[String], timew: &impl Timewarrior) -> String {
    let output = capture(timew, &command_line(view.as_str(), args));
    Pipeline::clock_times().run(&output)
}

/// Any other command: `tokens` starts with the subcommand name.
pub fn passthrough(tokens: &[String], timew: &impl Timewarrior) -> String {
    let output = capture(timew, tokens);
    Pipeline::clock_times().run(&output)
}
