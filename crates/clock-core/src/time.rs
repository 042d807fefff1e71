//! Time-of-day tokens and the generic 12-hour conversion pass.
//!
//! This is the pass used for every view except `summary`, where durations
//! share the `H:MM:SS` shape and need the row-aware pass in `summary`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;

use crate::scan::{map_lines, replace_where};

static HMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2}:\d{2}\b").unwrap());

static HM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").unwrap());

/// A meridiem marker right after an `H:MM` token means it is already 12-hour.
static MERIDIEM_AHEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[AaPp][Mm]").unwrap());

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:Z|[+-]\d{2}:?\d{2})?").unwrap()
});

/// Five or more whitespace-separated integers: the hour ruler of day/week/month charts.
static HOUR_RULER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\d+\s+\d+\s+\d+\s+\d+\s+\d+").unwrap());

static HOUR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,2}").unwrap());

static SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2}):\d{2}([ap]m)\b").unwrap());

/// Input layouts for ISO stamps, tried in order. The zone designator is parsed
/// and dropped; the wall-clock time is what gets displayed.
const TIMESTAMP_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S",
];

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %-I:%M %p";

/// Error for a token that is not a usable clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not `H:MM` or `H:MM:SS`.
    #[error("malformed time token: {0:?}")]
    Malformed(String),
    /// The fields parse but do not name a time of day.
    #[error("time token out of range: {0:?}")]
    OutOfRange(String),
}

/// Raw fields of an `H:MM[:SS]` token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: Option<u32>,
}

/// Splits an `H:MM[:SS]` token, allowing up to `max_hour_digits` hour digits.
pub(crate) fn split_fields(token: &str, max_hour_digits: usize) -> Result<Fields, TokenError> {
    let malformed = || TokenError::Malformed(token.to_string());
    let mut parts = token.split(':');

    let hours = parts
        .next()
        .filter(|h| h.len() <= max_hour_digits && is_digits(h))
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let minutes = parts
        .next()
        .filter(|m| m.len() == 2 && is_digits(m))
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let seconds = match parts.next() {
        Some(s) if s.len() == 2 && is_digits(s) => Some(s.parse().map_err(|_| malformed())?),
        Some(_) => return Err(malformed()),
        None => None,
    };
    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(Fields {
        hours,
        minutes,
        seconds,
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A validated 24-hour clock reading (`H:MM` or `H:MM:SS`).
///
/// `Display` renders the 12-hour form: `9:05am`, `12:00:00pm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    time: NaiveTime,
    with_seconds: bool,
}

impl FromStr for TimeOfDay {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s, 2)?;
        let out_of_range = || TokenError::OutOfRange(s.to_string());
        let hour = u32::try_from(fields.hours).map_err(|_| out_of_range())?;
        let time = NaiveTime::from_hms_opt(hour, fields.minutes, fields.seconds.unwrap_or(0))
            .ok_or_else(out_of_range)?;
        Ok(Self {
            time,
            with_seconds: fields.seconds.is_some(),
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if self.with_seconds {
            "%-I:%M:%S%P"
        } else {
            "%-I:%M%P"
        };
        write!(f, "{}", self.time.format(layout))
    }
}

/// Converts a 24-hour token to 12-hour form, or returns it unchanged.
pub(crate) fn to_12h_or_keep(token: &str) -> String {
    token
        .parse::<TimeOfDay>()
        .map_or_else(|_| token.to_string(), |time| time.to_string())
}

/// Compact 12-hour label for an hour-of-day ruler: `0` → `12a`, `13` → `1p`.
pub fn hour_label(hour: u32) -> Option<String> {
    let label = match hour {
        0 => "12a".to_string(),
        1..=11 => format!("{hour}a"),
        12 => "12p".to_string(),
        13..=23 => format!("{}p", hour - 12),
        _ => return None,
    };
    Some(label)
}

/// Rewrites the hour ruler of day/week/month charts to compact 12-hour labels.
///
/// A number is a label when it is followed by two or more spaces, the end of
/// the line, or a letter. Parts of a date or time are never labels.
pub fn convert_hour_headers(text: &str) -> String {
    map_lines(text, |line| {
        if !HOUR_RULER_RE.is_match(line) {
            return Cow::Borrowed(line);
        }
        Cow::Owned(replace_where(&HOUR_RE, line, |caps, before, after| {
            if before.ends_with(['-', '/', ':']) || !ends_hour_label(after) {
                return None;
            }
            caps[0].parse().ok().and_then(hour_label)
        }))
    })
}

fn ends_hour_label(after: &str) -> bool {
    let mut chars = after.chars();
    match (chars.next(), chars.next()) {
        (None, _) | (Some('\r'), None) => true,
        (Some(c), _) if c.is_ascii_alphabetic() => true,
        (Some(a), Some(b)) => a.is_whitespace() && b.is_whitespace(),
        (Some(_), None) => false,
    }
}

/// Rewrites ISO-8601 stamps to `YYYY-MM-DD h:MM AM/PM`.
pub fn convert_timestamps(text: &str) -> String {
    replace_where(&TIMESTAMP_RE, text, |caps, _, _| {
        let stamp = &caps[0];
        TIMESTAMP_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(stamp, layout).ok())
            .map(|dt| dt.format(TIMESTAMP_DISPLAY).to_string())
    })
}

fn convert_hms(text: &str) -> String {
    replace_where(&HMS_RE, text, |caps, _, _| {
        caps[0].parse::<TimeOfDay>().ok().map(|t| t.to_string())
    })
}

fn convert_hm(text: &str) -> String {
    replace_where(&HM_RE, text, |caps, before, after| {
        let glued_before = before
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit() || c == ':');
        let glued_after = after.starts_with(|c: char| c.is_ascii_digit() || c == ':')
            || MERIDIEM_AHEAD_RE.is_match(after);
        if glued_before || glued_after {
            return None;
        }
        caps[0].parse::<TimeOfDay>().ok().map(|t| t.to_string())
    })
}

/// The generic 12-hour pass: hour rulers, ISO stamps, `H:MM:SS`, then `H:MM`.
///
/// Only valid times of day are touched; `24:00:00` or `7:75` stay as they are.
pub fn convert_clock_times(text: &str) -> String {
    let text = convert_hour_headers(text);
    let text = convert_timestamps(&text);
    let text = convert_hms(&text);
    convert_hm(&text)
}

/// `H:MM:SSam` → `H:MMam`.
pub fn strip_seconds(text: &str) -> String {
    SECONDS_RE.replace_all(text, "${1}:${2}${3}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        token.parse::<TimeOfDay>().unwrap().to_string()
    }

    // ========== TimeOfDay ==========

    #[test]
    fn test_every_valid_time_converts_to_12h() {
        for hour in 0..24 {
            for (minute, second) in [(0, 0), (7, 30), (59, 59)] {
                let token = format!("{hour:02}:{minute:02}:{second:02}");
                let converted = convert(&token);

                let suffix = if hour < 12 { "am" } else { "pm" };
                let clock = converted.strip_suffix(suffix).unwrap();
                let (h, rest) = clock.split_once(':').unwrap();
                assert!(!h.starts_with('0'), "leading zero in {converted}");
                let h: u32 = h.parse().unwrap();
                assert!((1..=12).contains(&h), "hour out of range in {converted}");
                assert_eq!(rest, format!("{minute:02}:{second:02}"));
            }
        }
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(convert("00:00:00"), "12:00:00am");
        assert_eq!(convert("12:00:00"), "12:00:00pm");
        assert_eq!(convert("0:00"), "12:00am");
        assert_eq!(convert("23:59"), "11:59pm");
    }

    #[test]
    fn test_single_digit_hour() {
        assert_eq!(convert("9:05:00"), "9:05:00am");
        assert_eq!(convert("09:05"), "9:05am");
    }

    #[test]
    fn test_out_of_range_tokens_are_rejected() {
        assert_eq!(
            "24:00:00".parse::<TimeOfDay>(),
            Err(TokenError::OutOfRange("24:00:00".to_string()))
        );
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("12:00:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        for token in ["", "1", "123:00", "1:5", "1:05:5", "1:05:00:00", "a:05"] {
            assert!(
                matches!(token.parse::<TimeOfDay>(), Err(TokenError::Malformed(_))),
                "{token:?} should be malformed"
            );
        }
    }

    // ========== Hour labels ==========

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0).as_deref(), Some("12a"));
        assert_eq!(hour_label(12).as_deref(), Some("12p"));
        for hour in 1..12 {
            assert_eq!(hour_label(hour), Some(format!("{hour}a")));
        }
        for hour in 13..24 {
            assert_eq!(hour_label(hour), Some(format!("{}p", hour - 12)));
        }
        assert_eq!(hour_label(24), None);
    }

    #[test]
    fn test_hour_ruler_is_relabelled() {
        let ruler = "     0    1    2    3    4   12   13   23";
        assert_eq!(
            convert_hour_headers(ruler),
            "     12a    1a    2a    3a    4a   12p   1p   11p"
        );
    }

    #[test]
    fn test_hour_ruler_skips_numbers_followed_by_one_space() {
        let ruler = " 7 Jan    0    1    2    3    4";
        assert_eq!(
            convert_hour_headers(ruler),
            " 7 Jan    12a    1a    2a    3a    4a"
        );
    }

    #[test]
    fn test_hour_ruler_keeps_dates_intact() {
        let ruler = "Wed 2025-01-08   0  1  2  3  4";
        assert_eq!(
            convert_hour_headers(ruler),
            "Wed 2025-01-08   12a  1a  2a  3a  4a"
        );
    }

    #[test]
    fn test_short_number_runs_are_not_rulers() {
        let text = "Tracked 3 of 4 days";
        assert_eq!(convert_hour_headers(text), text);
    }

    // ========== Generic pass ==========

    #[test]
    fn test_convert_clock_times_rewrites_times_of_day() {
        let text = "Started 14:30:00, paused 9:05, back at 23:10";
        assert_eq!(
            convert_clock_times(text),
            "Started 2:30:00pm, paused 9:05am, back at 11:10pm"
        );
    }

    #[test]
    fn test_convert_clock_times_leaves_invalid_hours() {
        let text = "Tracked 24:00:00 and 31:15";
        assert_eq!(convert_clock_times(text), text);
    }

    #[test]
    fn test_convert_clock_times_skips_existing_meridiem() {
        let text = "Meeting 10:30 AM, call 4:15pm";
        assert_eq!(convert_clock_times(text), text);
    }

    #[test]
    fn test_convert_clock_times_is_stable_on_converted_text() {
        let once = convert_clock_times("13:45:10 and 07:05");
        assert_eq!(once, "1:45:10pm and 7:05am");
        assert_eq!(convert_clock_times(&once), once);
    }

    #[test]
    fn test_timestamps_with_and_without_zone() {
        assert_eq!(
            convert_timestamps("at 2025-01-06T14:05:00Z"),
            "at 2025-01-06 2:05 PM"
        );
        assert_eq!(
            convert_timestamps("2025-01-06T09:00:00+05:30"),
            "2025-01-06 9:00 AM"
        );
        assert_eq!(
            convert_timestamps("2025-01-06T00:30:00"),
            "2025-01-06 12:30 AM"
        );
    }

    #[test]
    fn test_invalid_timestamp_is_unchanged() {
        let text = "2025-13-40T25:00:00Z";
        assert_eq!(convert_timestamps(text), text);
    }

    #[test]
    fn test_started_line_from_timew_start() {
        let text = "Tracking work\n  Started 2025-01-06T09:00:00\n  Current            09:00:01\n";
        assert_eq!(
            convert_clock_times(text),
            "Tracking work\n  Started 2025-01-06 9:00 AM\n  Current            9:00:01am\n"
        );
    }

    // ========== Seconds ==========

    #[test]
    fn test_strip_seconds() {
        assert_eq!(strip_seconds("10:05:33am 2:22:10pm"), "10:05am 2:22pm");
        assert_eq!(strip_seconds("1:30:00 stays"), "1:30:00 stays");
    }
}
