//! Column layout and realignment of the summary table.
//!
//! By the time this pass runs, the earlier passes have changed the width of
//! almost every cell (12-hour times, `MM/DD` dates, humanized durations, no
//! Day column), so the table is measured and rebuilt from scratch.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::summary::{RowKind, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One column of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub align: Align,
}

pub const COLUMN_COUNT: usize = 7;

/// Index of the tags column in [`COLUMNS`].
pub const TAGS_COLUMN: usize = 2;

pub const COLUMNS: [Column; COLUMN_COUNT] = [
    Column {
        label: "Wk",
        align: Align::Left,
    },
    Column {
        label: "Date",
        align: Align::Left,
    },
    Column {
        label: "Tags",
        align: Align::Left,
    },
    Column {
        label: "Start",
        align: Align::Right,
    },
    Column {
        label: "End",
        align: Align::Right,
    },
    Column {
        label: "Time",
        align: Align::Right,
    },
    Column {
        label: "Total",
        align: Align::Right,
    },
];

/// Tags column title when annotations are shown alongside the tags.
pub const ANNOTATED_TAGS_LABEL: &str = "Tags / Reason";

pub const COLUMN_SEPARATOR: &str = " │ ";
pub const RULE: &str = "─";
pub const RULE_JUNCTION: &str = "─┼─";

static PRIMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<week>W\d+)\s+(?P<date>\d{2}/\d{2}|\d{4}-\d{2}-\d{2})\s+",
        r"(?P<tags>.*?)\s*\b(?P<start>\d{1,2}:\d{2}[ap]m)\s+(?P<end>\d{1,2}:\d{2}[ap]m|-)\s+",
        r"(?P<time>\d+h(?:\d+m)?|\d+m)(?:\s+(?P<total>\d+h(?:\d+m)?|\d+m))?\s*$",
    ))
    .unwrap()
});

static CONTINUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s+(?P<tags>.*?)\s*\b(?P<start>\d{1,2}:\d{2}[ap]m)\s+(?P<end>\d{1,2}:\d{2}[ap]m|-)\s+",
        r"(?P<time>\d+h(?:\d+m)?|\d+m)(?:\s+(?P<total>\d+h(?:\d+m)?|\d+m))?\s*$",
    ))
    .unwrap()
});

type Cells<'a> = [&'a str; COLUMN_COUNT];

enum Line<'a> {
    Header,
    Rule,
    /// An indented dash run under the totals, with its length.
    Underline(usize),
    Entry(Cells<'a>),
    Verbatim(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let entry = |re: &Regex| {
        re.captures(line)
            .map_or(Line::Verbatim(line), |caps| Line::Entry(cells(&caps)))
    };
    match classify(line) {
        RowKind::Header => Line::Header,
        RowKind::Separator if line.starts_with(char::is_whitespace) => {
            Line::Underline(line.trim().chars().count())
        }
        RowKind::Separator => Line::Rule,
        RowKind::Primary => entry(&PRIMARY_RE),
        RowKind::Continuation => entry(&CONTINUATION_RE),
        RowKind::Blank => Line::Verbatim(line),
    }
}

fn cells<'a>(caps: &Captures<'a>) -> Cells<'a> {
    let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
    [
        field("week"),
        field("date"),
        field("tags"),
        field("start"),
        field("end"),
        field("time"),
        field("total"),
    ]
}

fn header_labels(annotations: bool) -> Cells<'static> {
    let mut labels = COLUMNS.map(|column| column.label);
    if annotations {
        labels[TAGS_COLUMN] = ANNOTATED_TAGS_LABEL;
    }
    labels
}

fn measure(labels: &Cells<'_>, lines: &[Line<'_>]) -> [usize; COLUMN_COUNT] {
    let mut widths = labels.map(|label| label.chars().count());
    for line in lines {
        if let Line::Entry(cells) = line {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    widths
}

fn render_row(cells: &Cells<'_>, widths: &[usize; COLUMN_COUNT]) -> String {
    let padded: Vec<String> = COLUMNS
        .iter()
        .zip(cells)
        .zip(widths)
        .map(|((column, cell), &width)| match column.align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect();
    padded.join(COLUMN_SEPARATOR).trim_end().to_string()
}

fn render_rule(widths: &[usize; COLUMN_COUNT]) -> String {
    widths
        .iter()
        .map(|&width| RULE.repeat(width))
        .collect::<Vec<_>>()
        .join(RULE_JUNCTION)
}

/// Rebuilds the summary table with measured widths and box-drawing rules.
///
/// The header and rule are regenerated, entry rows are re-padded (week, date
/// and tags left-aligned, times and durations right-aligned), and any other
/// line is kept verbatim. Text without a header row is returned unchanged.
pub fn realign(text: &str, annotations: bool) -> String {
    let lines: Vec<Line<'_>> = text.split('\n').map(parse_line).collect();
    if !lines.iter().any(|line| matches!(line, Line::Header)) {
        return text.to_string();
    }

    let labels = header_labels(annotations);
    let widths = measure(&labels, &lines);
    let table_width = widths.iter().sum::<usize>()
        + COLUMN_SEPARATOR.chars().count() * (COLUMN_COUNT - 1);

    lines
        .iter()
        .map(|line| match line {
            Line::Header => render_row(&labels, &widths),
            Line::Rule => render_rule(&widths),
            Line::Underline(len) => format!("{:>table_width$}", RULE.repeat(*len)),
            Line::Entry(cells) => render_row(cells, &widths),
            Line::Verbatim(text) => (*text).to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const FORMATTED: &str = "\
Wk  Date       Tags    Start      End    Time   Total
--- ---------- ---- -------- -------- ------- -------
W2  01/06 proj  9:00am 10:30am 1h30m
                   mail 11:00am 11:45am 45m 2h15m
W2  01/07 client work 1:05pm        - 1h30m 1h30m
";

    #[test]
    fn test_rule_matches_header_width() {
        let widths = [2, 5, 4, 7, 7, 5, 5];
        let header = render_row(&header_labels(false), &widths);
        let rule = render_rule(&widths);
        assert_eq!(header.chars().count(), rule.chars().count());
        assert_eq!(rule.matches('┼').count(), COLUMN_COUNT - 1);
    }

    #[test]
    fn test_realign_summary_table() {
        assert_snapshot!(realign(FORMATTED, false), @r"
        Wk │ Date  │ Tags        │   Start │     End │  Time │ Total
        ───┼───────┼─────────────┼─────────┼─────────┼───────┼──────
        W2 │ 01/06 │ proj        │  9:00am │ 10:30am │ 1h30m │
           │       │ mail        │ 11:00am │ 11:45am │   45m │ 2h15m
        W2 │ 01/07 │ client work │  1:05pm │       - │ 1h30m │ 1h30m
        ");
    }

    #[test]
    fn test_annotation_header_label() {
        let out = realign(FORMATTED, true);
        let header = out.lines().next().unwrap();
        assert!(header.contains("│ Tags / Reason │"), "{header}");
    }

    #[test]
    fn test_continuation_rows_share_boundaries() {
        let out = realign(FORMATTED, false);
        let bars: Vec<Vec<usize>> = out
            .lines()
            .filter(|line| line.contains('│'))
            .map(|line| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '│')
                    .map(|(i, _)| i)
                    .take(COLUMN_COUNT - 2)
                    .collect()
            })
            .collect();
        assert!(bars.windows(2).all(|pair| pair[0] == pair[1]), "{out}");
    }

    #[test]
    fn test_unrecognised_lines_are_kept() {
        let text = format!("{FORMATTED}\nTracked by timewarrior\n");
        let out = realign(&text, false);
        assert!(out.ends_with("\n\nTracked by timewarrior\n"), "{out}");
    }

    #[test]
    fn test_total_underline_is_right_aligned() {
        let text = format!("{FORMATTED}                                     -------\n");
        let out = realign(&text, false);
        let rule_width = out.lines().nth(1).unwrap().chars().count();
        let underline = out.lines().nth(5).unwrap();
        assert_eq!(underline.chars().count(), rule_width);
        assert!(underline.ends_with("───────"));
    }

    #[test]
    fn test_text_without_header_is_unchanged() {
        let text = "No filtered data found in the range.\n";
        assert_eq!(realign(text, false), text);
    }
}
