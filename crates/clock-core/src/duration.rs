//! Elapsed-time tokens from the Time and Total columns.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::scan::{map_lines, replace_where};
use crate::time::{TokenError, split_fields};

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+:\d{2}:\d{2}").unwrap());

/// A Total cell that was rendered as a clock time, at the end of its line.
static TRAILING_CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s(?P<hour>\d{1,2}):(?P<minute>\d{2})(?P<meridiem>[ap]m)\s*$").unwrap()
});

/// Longest hour field accepted in a duration.
const MAX_HOUR_DIGITS: usize = 6;

/// Elapsed time with minute precision.
///
/// Parsed from `H:MM:SS` (seconds are dropped). `Display` renders the compact
/// label used in reports: `0m`, `45m`, `2h`, `1h32m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    hours: u64,
    minutes: u32,
}

impl Elapsed {
    /// Creates an elapsed time. Minutes are expected to be below 60.
    pub const fn new(hours: u64, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub const fn hours(self) -> u64 {
        self.hours
    }

    pub const fn minutes(self) -> u32 {
        self.minutes
    }
}

impl FromStr for Elapsed {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s, MAX_HOUR_DIGITS)?;
        let Some(seconds) = fields.seconds else {
            return Err(TokenError::Malformed(s.to_string()));
        };
        if fields.minutes > 59 || seconds > 59 {
            return Err(TokenError::OutOfRange(s.to_string()));
        }
        Ok(Self::new(fields.hours, fields.minutes))
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hours, self.minutes) {
            (0, minutes) => write!(f, "{minutes}m"),
            (hours, 0) => write!(f, "{hours}h"),
            (hours, minutes) => write!(f, "{hours}h{minutes}m"),
        }
    }
}

/// Rewrites `H:MM:SS` durations to their compact label.
///
/// A token glued to a letter or digit is left alone, so `9:00:00am` is never
/// read as a duration.
pub fn humanize_durations(text: &str) -> String {
    replace_where(&DURATION_RE, text, |caps, _, after| {
        if after.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }
        caps[0].parse::<Elapsed>().ok().map(|elapsed| elapsed.to_string())
    })
}

/// Turns a trailing `H:MMam`/`H:MMpm` Total cell back into a duration.
///
/// The 12-hour rendering is inverted first, so `1:30pm` becomes `13h30m`
/// and `12:45am` becomes `45m`.
pub fn repair_total_column(text: &str) -> String {
    map_lines(text, |line| {
        let Some(caps) = TRAILING_CLOCK_RE.captures(line) else {
            return Cow::Borrowed(line);
        };
        let (Some(hour), Some(meridiem)) = (caps.name("hour"), caps.name("meridiem")) else {
            return Cow::Borrowed(line);
        };
        let Some(elapsed) = elapsed_from_clock(&caps) else {
            return Cow::Borrowed(line);
        };
        Cow::Owned(format!(
            "{}{elapsed}{}",
            &line[..hour.start()],
            &line[meridiem.end()..]
        ))
    })
}

fn elapsed_from_clock(caps: &Captures<'_>) -> Option<Elapsed> {
    let hour: u64 = caps["hour"].parse().ok()?;
    let minutes: u32 = caps["minute"].parse().ok()?;
    if !(1..=12).contains(&hour) || minutes > 59 {
        return None;
    }
    let hours = match (hour, &caps["meridiem"]) {
        (12, "am") => 0,
        (12, _) => 12,
        (hour, "am") => hour,
        (hour, _) => hour + 12,
    };
    Some(Elapsed::new(hours, minutes))
}
