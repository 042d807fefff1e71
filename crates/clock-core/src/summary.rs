//! Row classification and the summary-only rewrites.
//!
//! `timew summary` prints a fixed layout:
//!
//! ```text
//! Wk  Date       Day Tags    Start      End    Time   Total
//! --- ---------- --- ---- -------- -------- ------- -------
//! W2  2025-01-06 Mon proj  9:00:00 10:30:00 1:30:00
//!                    mail 11:00:00 11:45:00 0:45:00 2:15:00
//!
//!                                                   2:15:00
//! ```
//!
//! Start/End and Time/Total share the `H:MM:SS` shape, so the passes here
//! work on row positions rather than on token shape alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::scan::map_lines;
use crate::time::to_12h_or_keep;

static WEEK_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*W\d+\s").unwrap());

/// First `H:MM:SS` followed by either an end time or the open-interval dash.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?P<start>\d{1,2}:\d{2}:\d{2})(?P<gap>\s+)(?:(?P<end>\d{1,2}:\d{2}:\d{2})\b|-(?:\s|$))",
    )
    .unwrap()
});

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-(\d{2})-(\d{2})\b").unwrap());

static DAY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bDay\b").unwrap());

/// Week marker and date, then the weekday token to drop.
static WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*W\d+\s+\S+)\s+\p{L}+\.?(\s|$)").unwrap());

static GRAND_TOTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(\d+h(?:\d+m)?|\d+m)\s*$").unwrap());

/// Role of a line in summary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    /// Column titles, starting with `Wk`.
    Header,
    /// Dashes or box-drawing rule glyphs only.
    Separator,
    /// Starts with a week marker and carries the date.
    Primary,
    /// Everything else: extra entries for the same day, totals, messages.
    Continuation,
}

pub fn classify(line: &str) -> RowKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        RowKind::Blank
    } else if trimmed.split_whitespace().next() == Some("Wk") && trimmed.contains("Date") {
        RowKind::Header
    } else if trimmed
        .chars()
        .all(|c| matches!(c, '-' | '─' | '┼') || c.is_whitespace())
    {
        RowKind::Separator
    } else if WEEK_MARKER_RE.is_match(line) {
        RowKind::Primary
    } else {
        RowKind::Continuation
    }
}

/// Converts the Start and End cells of every entry row to 12-hour form.
///
/// Only the matched span is rewritten. Durations after it keep their
/// `H:MM:SS` shape for [`crate::humanize_durations`].
pub fn convert_entry_times(text: &str) -> String {
    map_lines(text, |line| match classify(line) {
        RowKind::Primary | RowKind::Continuation => convert_entry_span(line),
        RowKind::Blank | RowKind::Header | RowKind::Separator => Cow::Borrowed(line),
    })
}

fn convert_entry_span(line: &str) -> Cow<'_, str> {
    let Some(caps) = ENTRY_RE.captures(line) else {
        return Cow::Borrowed(line);
    };
    let (Some(start), Some(gap)) = (caps.name("start"), caps.name("gap")) else {
        return Cow::Borrowed(line);
    };

    let mut rewritten = String::with_capacity(line.len() + 4);
    rewritten.push_str(&line[..start.start()]);
    rewritten.push_str(&to_12h_or_keep(start.as_str()));
    match caps.name("end") {
        Some(end) => {
            rewritten.push_str(gap.as_str());
            rewritten.push_str(&to_12h_or_keep(end.as_str()));
            rewritten.push_str(&line[end.end()..]);
        }
        // Still running: the dash stays where it is.
        None => rewritten.push_str(&line[start.end()..]),
    }
    Cow::Owned(rewritten)
}

/// `YYYY-MM-DD` → `MM/DD`.
pub fn reformat_dates(text: &str) -> String {
    DATE_RE.replace_all(text, "${1}/${2}").into_owned()
}

/// Drops the Day column from the header, its separator dashes, and the
/// weekday token of every primary row.
///
/// Text without a header carrying both `Date` and `Day` is returned as is.
pub fn remove_day_column(text: &str) -> String {
    let Some(day_at) = text.split('\n').find_map(day_label_offset) else {
        return text.to_string();
    };

    map_lines(text, |line| match classify(line) {
        RowKind::Header => drop_run(line, day_at, char::is_alphabetic),
        RowKind::Separator => drop_run(line, day_at, |c| c == '-'),
        RowKind::Primary => WEEKDAY_RE.replace(line, "${1}${2}"),
        RowKind::Blank | RowKind::Continuation => Cow::Borrowed(line),
    })
}

fn day_label_offset(line: &str) -> Option<usize> {
    if classify(line) != RowKind::Header || !line.contains("Date") {
        return None;
    }
    DAY_LABEL_RE.find(line).map(|label| label.start())
}

/// Drops the space before byte `at` and the run of `fill` characters from `at`.
fn drop_run(line: &str, at: usize, fill: impl Fn(char) -> bool) -> Cow<'_, str> {
    let (Some(head), Some(tail)) = (line.get(..at), line.get(at..)) else {
        return Cow::Borrowed(line);
    };
    let Some(head) = head.strip_suffix(' ') else {
        return Cow::Borrowed(line);
    };
    let run = tail.find(|c: char| !fill(c)).unwrap_or(tail.len());
    if run == 0 {
        return Cow::Borrowed(line);
    }
    Cow::Owned(format!("{head}{}", &tail[run..]))
}

/// Labels the final bare duration as `Grand Total: <duration>`.
///
/// The label is right-aligned to the width of the first separator line.
pub fn label_grand_total(text: &str) -> String {
    let mut lines: Vec<Cow<'_, str>> = text.split('\n').map(Cow::Borrowed).collect();
    let Some(index) = lines.iter().rposition(|line| GRAND_TOTAL_RE.is_match(line)) else {
        return text.to_string();
    };
    let width = lines
        .iter()
        .find(|line| classify(line) == RowKind::Separator)
        .map_or(0, |line| line.trim_end().chars().count());

    if let Some(caps) = GRAND_TOTAL_RE.captures(&lines[index]) {
        let label = format!("Grand Total: {}", &caps[1]);
        let rewritten = format!("{label:>width$}");
        lines[index] = Cow::Owned(rewritten);
    }
    lines.join("\n")
}
