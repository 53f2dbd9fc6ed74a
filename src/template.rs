//! Command templates.
//!
//! The grammar has two tokens:
//!
//! * `%s` is the placeholder, replaced by the query.
//! * `\%s` is an escaped placeholder, emitted as a literal `%s`.
//!
//! Everything else is copied through unchanged.

use std::sync::LazyLock;
use regex::Regex;
use crate::model::CommandEntry;
use crate::prompt::Query;

pub const PLACEHOLDER: &str = "%s";
pub const ESCAPED_PLACEHOLDER: &str = r"\%s";

const SENTINEL: &str = "\u{0}__ESCAPED_PERCENT_S__\u{0}";

static UNESCAPED_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^\\])%s").expect("placeholder pattern is valid")
});

/// True when `template` has at least one `%s` not preceded by a backslash.
pub fn needs_query(template: &str) -> bool {
    template.contains(PLACEHOLDER) && UNESCAPED_PLACEHOLDER.is_match(template)
}

/// Browser-bound queries travel in a URL, spaces become `+`.
pub fn encode_for_browser(query: &str) -> String {
    query.replace(' ', "+")
}

/// Substitutes `query` for every unescaped placeholder and unescapes `\%s`.
pub fn materialize(template: &str, query: &str, encode_for_url: bool) -> String {
    let shielded = template.replace(ESCAPED_PLACEHOLDER, SENTINEL);
    let query = if encode_for_url {
        encode_for_browser(query)
    } else {
        query.to_string()
    };
    shielded
        .replace(PLACEHOLDER, &query)
        .replace(SENTINEL, PLACEHOLDER)
}

/// `<browser> <command>`
pub fn wrap_in_browser(browser: &str, command: &str) -> String {
    format!("{} {}", browser, command)
}

/// `"$(<prompt>)"`, kept as one shell word. Browser-bound entries pipe the
/// answer through `tr` so the target shell does the `+` encoding.
pub fn deferred_expression(prompt: &str, encode_for_url: bool) -> String {
    if encode_for_url {
        format!("\"$({} | tr ' ' '+')\"", prompt)
    } else {
        format!("\"$({})\"", prompt)
    }
}

/// Final shell line for `entry`.
pub fn command_line(entry: &CommandEntry, query: &Query, browser: &str) -> String {
    let line = match query {
        Query::Text(text) => materialize(&entry.template, text, entry.browser),
        Query::Deferred(prompt) => {
            let expression = deferred_expression(prompt, entry.browser);
            materialize(&entry.template, &expression, false)
        }
    };
    if entry.browser {
        wrap_in_browser(browser, &line)
    } else {
        line
    }
}
