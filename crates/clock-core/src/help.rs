//! Help text rewrite: timewarrior's own name becomes ours.

use std::sync::LazyLock;

use regex::Regex;

/// Name of the wrapped program as it appears in its help text.
pub const WRAPPED_NAME: &str = "timew";

/// Name this tool is invoked as.
pub const NAME: &str = "clock";

static COMMAND_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?m)^       {WRAPPED_NAME} ")).unwrap());

static USAGE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?m)^Usage: {WRAPPED_NAME}")).unwrap());

/// Replaces the command-synopsis and `Usage:` prefixes naming `timew`.
pub fn rename_tool(text: &str) -> String {
    let text = COMMAND_LINE_RE.replace_all(text, format!("       {NAME} "));
    USAGE_LINE_RE
        .replace_all(&text, format!("Usage: {NAME}"))
        .into_owned()
}
