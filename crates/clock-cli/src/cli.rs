//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Timewarrior with 12-hour times and a friendlier summary.
///
/// Any command or flag clock does not know is handed to timewarrior as is,
/// `--help` and `--version` included.
#[derive(Debug, Parser)]
#[command(
    name = "clock",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands. All but `version` forward their arguments.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show timewarrior's help under clock's name.
    #[command(disable_help_flag = true)]
    Help(ForwardArgs),

    /// Print clock's version.
    Version,

    /// Day chart with 12-hour times.
    #[command(disable_help_flag = true)]
    Day(ForwardArgs),

    /// Week chart with 12-hour times.
    #[command(disable_help_flag = true)]
    Week(ForwardArgs),

    /// Month chart with 12-hour times.
    #[command(disable_help_flag = true)]
    Month(ForwardArgs),

    /// Reformatted summary table (the default).
    #[command(visible_alias = "s", disable_help_flag = true)]
    Summary(ForwardArgs),

    /// Start tracking: `clock begin <tags> "<annotation>"`.
    #[command(disable_help_flag = true)]
    Begin(ForwardArgs),

    #[command(external_subcommand)]
    External(Vec<String>),
}

/// What a command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Parsed(Cli),
    /// Arguments clock defines no meaning for, without the program name.
    Forward(Vec<String>),
}

impl Invocation {
    /// Parses `argv` (program name first). Anything clap rejects is kept
    /// verbatim for timewarrior.
    pub fn from_args(argv: Vec<String>) -> Self {
        match Cli::try_parse_from(&argv) {
            Ok(cli) => Self::Parsed(cli),
            Err(_) => Self::Forward(argv.into_iter().skip(1).collect()),
        }
    }
}

/// Arguments passed through to timewarrior untouched.
#[derive(Debug, Clone, Default, Args)]
pub struct ForwardArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
