//! `clock begin <tags…> "<annotation>"`: start tracking and annotate in one go.

use clock_core::Pipeline;

use super::util::{capture, command_line};
use crate::timew::Timewarrior;

pub const USAGE_ERROR: &str =
    r#"Error: begin requires at least tags. Usage: clock begin <tags> "<annotation>""#;

/// Tags to start with, and an optional annotation to attach afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginRequest {
    pub tags: Vec<String>,
    pub annotation: Option<String>,
}

impl BeginRequest {
    /// Splits arguments into tags and a double-quoted annotation.
    ///
    /// The annotation runs from the first token starting with `"` to the
    /// first token ending with `"`, and may be a single token such as
    /// `"notes"`. An unclosed quote runs to the end of the arguments. Tokens
    /// on either side of the annotation are tags. Returns `None` for no
    /// arguments.
    pub fn parse(args: &[String]) -> Option<Self> {
        if args.is_empty() {
            return None;
        }

        let mut tags = Vec::new();
        let mut words: Vec<&str> = Vec::new();
        let mut state = Quote::Before;
        for arg in args {
            state = match state {
                Quote::Before => match arg.strip_prefix('"') {
                    Some(rest) if arg.len() > 1 && arg.ends_with('"') => {
                        words.push(rest.trim_end_matches('"'));
                        Quote::Closed
                    }
                    // A lone `"` opens and closes an empty annotation.
                    Some(_) if arg.len() == 1 => Quote::Closed,
                    Some(rest) => {
                        words.push(rest);
                        Quote::Open
                    }
                    None => {
                        tags.push(arg.clone());
                        Quote::Before
                    }
                },
                Quote::Open => {
                    words.push(arg.trim_end_matches('"'));
                    if arg.ends_with('"') {
                        Quote::Closed
                    } else {
                        Quote::Open
                    }
                }
                Quote::Closed => {
                    tags.push(arg.clone());
                    Quote::Closed
                }
            };
        }

        let annotation = Some(words.join(" ")).filter(|text| !text.is_empty());
        Some(Self { tags, annotation })
    }
}

#[derive(Debug, Clone, Copy)]
enum Quote {
    Before,
    Open,
    Closed,
}

/// Runs `start <tags…>`, then `annotate <annotation>` when one was given.
pub fn run(args: &[String], timew: &impl Timewarrior) -> String {
    let Some(request) = BeginRequest::parse(args) else {
        return format!("{USAGE_ERROR}\n");
    };
    tracing::debug!(?request, "beginning");

    let started = capture(timew, &command_line("start", &request.tags));
    let mut output = Pipeline::clock_times().run(&started);
    if let Some(annotation) = request.annotation {
        output.push('\n');
        output.push_str(&capture(timew, &["annotate".to_string(), annotation]));
    }
    output
}
