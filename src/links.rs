//! Link resolver — rewrites `res://` references into relative markdown links.
//!
//! In the default [`LinkMode::PerDelimiter`] mode the text is scanned three
//! times, once per terminating delimiter (space, newline, double quote). Each
//! pass resolves only the first reference in the text, so at most three
//! distinct references are linked. [`LinkMode::Exhaustive`] links all of them.

use crate::config::LinkMode;
use crate::paths::Localizer;
use std::path::Path;

/// Delimiters tried in order by [`LinkMode::PerDelimiter`].
const DELIMITERS: [char; 3] = [' ', '\n', '"'];

/// Rewrite resource references in `text` for the page written to `own_path`.
pub fn markup(text: &str, localizer: &Localizer, own_path: &Path) -> String {
    match localizer.config().link_mode {
        LinkMode::PerDelimiter => markup_per_delimiter(text, localizer, own_path),
        LinkMode::Exhaustive => markup_exhaustive(text, localizer, own_path),
    }
}

fn markup_per_delimiter(text: &str, localizer: &Localizer, own_path: &Path) -> String {
    let prefix = localizer.config().resource_prefix.as_str();
    let mut docs = text.to_string();
    for delimiter in DELIMITERS {
        let Some(reference) = first_reference(&docs, prefix, delimiter).map(str::to_string) else {
            continue;
        };
        let link = render_link(&reference, localizer, own_path);
        docs = docs.replace(&format!("{prefix}{reference}"), &link);
    }
    docs
}

/// Path after the first `prefix` in `text`, up to the first `delimiter`.
///
/// A candidate that is empty or spans whitespace before the delimiter is not
/// a reference.
fn first_reference<'a>(text: &'a str, prefix: &str, delimiter: char) -> Option<&'a str> {
    let start = text.find(prefix)? + prefix.len();
    let rest = &text[start..];
    let candidate = &rest[..rest.find(delimiter)?];
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        None
    } else {
        Some(candidate)
    }
}

fn markup_exhaustive(text: &str, localizer: &Localizer, own_path: &Path) -> String {
    let prefix = localizer.config().resource_prefix.as_str();
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(prefix) {
        output.push_str(&rest[..pos]);
        let after = &rest[pos + prefix.len()..];
        let end = after
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(after.len());
        if end == 0 {
            output.push_str(prefix);
        } else {
            output.push_str(&render_link(&after[..end], localizer, own_path));
        }
        rest = &after[end..];
    }
    output.push_str(rest);
    output
}

/// `[basename](relative doc path)` for a reference path (without prefix).
fn render_link(reference: &str, localizer: &Localizer, own_path: &Path) -> String {
    let name = Path::new(reference)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| reference.to_string());
    let target = localizer.doc_path(&localizer.resource_path(reference));
    format!("[{}]({})", name, localizer.link_from(own_path, &target))
}
