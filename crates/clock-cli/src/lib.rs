//! Command dispatch for `clock`, a 12-hour face for timewarrior.
//!
//! This crate maps subcommands onto timewarrior invocations and the
//! formatting pipeline from `clock-core` that each one gets.

mod cli;
pub mod commands;
mod config;
pub mod timew;

pub use cli::{Cli, Commands, ForwardArgs, Invocation};
pub use config::Config;
pub use timew::{InvocationError, TimewCli, Timewarrior};
