//! Output formatting for `clock`, a thin wrapper around timewarrior.
//!
//! Every pass is a pure `&str -> String` rewrite that leaves text it does not
//! recognise untouched. This crate contains:
//! - Time-of-day tokens, hour rulers and ISO stamps (`time`)
//! - Elapsed-time tokens from the Time and Total columns (`duration`)
//! - Summary row classification and the summary-only rewrites (`summary`)
//! - Column realignment for the summary table (`table`)
//! - Tool-name substitution in help text (`help`)
//! - Ordered composition of passes per command (`pipeline`)

pub mod duration;
pub mod help;
pub mod pipeline;
mod scan;
pub mod summary;
pub mod table;
pub mod time;

pub use duration::{Elapsed, humanize_durations, repair_total_column};
pub use pipeline::{Pass, Pipeline};
pub use summary::{RowKind, classify};
pub use time::{TimeOfDay, TokenError, hour_label};
