//! Regex helpers shared by the formatting passes.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Replaces the matches of `re` for which `rewrite` returns `Some`.
///
/// `rewrite` also receives the text before and after the match, which is how
/// the passes express look-around conditions the `regex` crate lacks. Declined
/// matches are copied through unchanged.
pub(crate) fn replace_where<F>(re: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>, &str, &str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let before = &text[..whole.start()];
        let after = &text[whole.end()..];
        if let Some(replacement) = rewrite(&caps, before, after) {
            out.push_str(&text[copied..whole.start()]);
            out.push_str(&replacement);
            copied = whole.end();
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Rewrites `text` line by line, keeping the `\n` separators where they were.
pub(crate) fn map_lines<'a, F>(text: &'a str, rewrite: F) -> String
where
    F: FnMut(&'a str) -> Cow<'a, str>,
{
    text.split('\n').map(rewrite).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_where_keeps_declined_matches() {
        let re = Regex::new(r"\d+").unwrap();
        let out = replace_where(&re, "a1 b22 c333", |caps, _, _| {
            (caps[0].len() == 2).then(|| "##".to_string())
        });
        assert_eq!(out, "a1 b## c333");
    }

    #[test]
    fn test_replace_where_sees_surrounding_text() {
        let re = Regex::new(r"x").unwrap();
        let out = replace_where(&re, "axb xc x", |_, before, after| {
            (before.ends_with(' ') && !after.is_empty()).then(|| "y".to_string())
        });
        assert_eq!(out, "axb yc x");
    }

    #[test]
    fn test_map_lines_preserves_trailing_newline() {
        let out = map_lines("one\ntwo\n", |line| Cow::Owned(line.to_uppercase()));
        assert_eq!(out, "ONE\nTWO\n");
    }
}
