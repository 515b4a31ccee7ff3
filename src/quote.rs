//! Quote markers and body extraction

use crate::lines;

const QUOTE_MARKER: char = '>';
const INDENT: &str = "    ";

/// Remove the leading `>` run of a single line, plus at most one space.
///
/// A line made only of markers becomes empty.
#[must_use]
pub fn strip_line(line: &str) -> &str {
    let rest = line.trim_start_matches(QUOTE_MARKER);
    if rest.len() == line.len() {
        return line;
    }
    if rest.trim().is_empty() {
        return "";
    }

    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Remove quote markers from every line of `text`
#[must_use]
pub fn strip_quotes(text: &str) -> String {
    text.split('\n')
        .map(strip_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `line` opens with a quote marker
#[must_use]
pub fn is_quoted(line: &str) -> bool {
    line.starts_with(QUOTE_MARKER)
}

/// Remove quote markers from every line, then a uniform indent
#[must_use]
pub fn dequote(lines: &[String]) -> Vec<String> {
    unindent(lines.iter().map(|l| strip_line(l).to_string()).collect())
}

/// Remove a four-space indent when every non-blank line carries one
#[must_use]
pub fn unindent(lines: Vec<String>) -> Vec<String> {
    let indented = lines
        .iter()
        .filter(|l| !lines::is_blank(l))
        .all(|l| l.starts_with(INDENT));
    let any = lines.iter().any(|l| !lines::is_blank(l));

    if !(indented && any) {
        return lines;
    }

    lines
        .into_iter()
        .map(|l| l.strip_prefix(INDENT).map_or_else(|| l.clone(), ToString::to_string))
        .collect()
}

/// Assemble the body from the lines following the header block
#[must_use]
pub fn extract_body(lines: &[String]) -> String {
    lines::join(lines::trim_blank(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line() {
        assert_eq!(strip_line("> Hello"), "Hello");
        assert_eq!(strip_line(">> Hello"), "Hello");
        assert_eq!(strip_line(">>Hello"), "Hello");
        assert_eq!(strip_line(">  indented"), " indented");
        assert_eq!(strip_line(">>"), "");
        assert_eq!(strip_line("> "), "");
        assert_eq!(strip_line("plain > text"), "plain > text");
    }

    #[test]
    fn test_strip_quotes_idempotent() {
        let once = strip_quotes("> a\n>\n>> b\nc");
        assert_eq!(once, "a\n\nb\nc");
        assert_eq!(strip_quotes(&once), once);
    }

    #[test]
    fn test_dequote_indent() {
        let lines: Vec<String> = ["    From: a@b.c", "", "    body", "      deeper"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(dequote(&lines), vec!["From: a@b.c", "", "body", "  deeper"]);
    }

    #[test]
    fn test_dequote_keeps_partial_indent() {
        let lines: Vec<String> = ["From: a@b.c", "    code"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(dequote(&lines), lines);
    }

    #[test]
    fn test_unindent_leaves_quote_markers() {
        let lines: Vec<String> = ["    Hi", "    > quoted"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(unindent(lines), vec!["Hi", "> quoted"]);
        assert!(is_quoted("> quoted"));
        assert!(!is_quoted(" plain > text"));
    }

    #[test]
    fn test_extract_body_trims_blank_edges() {
        let lines: Vec<String> = ["", "Hi", "", "there", "", ""]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(extract_body(&lines), "Hi\n\nthere");
    }
}
