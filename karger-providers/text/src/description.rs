//! Description comments embedded in graph files.

use std::io::BufRead;

/// Description reported for files without a description comment.
pub const DEFAULT_DESCRIPTION: &str = "No description.";

const MARKERS: [&str; 2] = ["# Descrição:", "# Description:"];

/// Returns the description carried by `line`, if it is a description comment.
///
/// # Examples
/// ```
/// use karger_providers_text::description_marker;
///
/// assert_eq!(description_marker("# Description:  a square "), Some("a square"));
/// assert_eq!(description_marker("# Descrição: um quadrado"), Some("um quadrado"));
/// assert_eq!(description_marker("# just a comment"), None);
/// ```
#[must_use]
pub fn description_marker(line: &str) -> Option<&str> {
    let line = line.trim();
    MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

/// Scans `reader` for the first description comment.
///
/// Returns [`DEFAULT_DESCRIPTION`] when no line carries one.
///
/// # Errors
/// Propagates failures from the underlying reader, including invalid UTF-8.
pub fn read_description<R: BufRead>(reader: R) -> std::io::Result<String> {
    for line in reader.lines() {
        if let Some(found) = description_marker(&line?) {
            return Ok(found.to_owned());
        }
    }
    Ok(DEFAULT_DESCRIPTION.to_owned())
}
