//! Ordered composition of formatting passes.

use crate::{duration, help, summary, table, time};

/// One text rewrite. Each variant is a pure `&str -> String` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Hour rulers, ISO stamps, `H:MM:SS` and `H:MM` to 12-hour form.
    ClockTimes,
    /// ISO-8601 stamps only.
    Timestamps,
    /// Start/End cells of summary rows only.
    EntryTimes,
    StripSeconds,
    HumanizeDurations,
    /// Total cells rendered as a clock time back to a duration.
    RepairTotals,
    ReformatDates,
    RemoveDayColumn,
    Realign {
        annotations: bool,
    },
    GrandTotal,
    RenameTool,
}

impl Pass {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::ClockTimes => time::convert_clock_times(text),
            Self::Timestamps => time::convert_timestamps(text),
            Self::EntryTimes => summary::convert_entry_times(text),
            Self::StripSeconds => time::strip_seconds(text),
            Self::HumanizeDurations => duration::humanize_durations(text),
            Self::RepairTotals => duration::repair_total_column(text),
            Self::ReformatDates => summary::reformat_dates(text),
            Self::RemoveDayColumn => summary::remove_day_column(text),
            Self::Realign { annotations } => table::realign(text, annotations),
            Self::GrandTotal => summary::label_grand_total(text),
            Self::RenameTool => help::rename_tool(text),
        }
    }
}

/// An ordered list of passes applied to one command's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    passes: Vec<Pass>,
}

impl Pipeline {
    pub const fn new(passes: Vec<Pass>) -> Self {
        Self { passes }
    }

    /// Generic time conversion for `day`, `week`, `month` and passthrough.
    pub fn clock_times() -> Self {
        Self::new(vec![Pass::ClockTimes])
    }

    /// The full summary treatment.
    ///
    /// Entry times are converted before durations are humanized, because the
    /// two share the `H:MM:SS` shape and only row position tells them apart.
    /// ISO stamps (as in the empty-range message) go first, before the date
    /// rewrite.
    pub fn summary(annotations: bool) -> Self {
        Self::new(vec![
            Pass::Timestamps,
            Pass::EntryTimes,
            Pass::StripSeconds,
            Pass::HumanizeDurations,
            Pass::RepairTotals,
            Pass::ReformatDates,
            Pass::RemoveDayColumn,
            Pass::Realign { annotations },
            Pass::GrandTotal,
        ])
    }

    pub fn help() -> Self {
        Self::new(vec![Pass::RenameTool])
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn run(&self, text: &str) -> String {
        self.passes.iter().fold(text.to_string(), |text, pass| {
            tracing::trace!(?pass, "applying pass");
            pass.apply(&text)
        })
    }
}
