//! Line tokenizer
//!
//! Bodies reach us with whatever line endings the client produced, often a
//! mix of them, plus stray byte-order marks and non-breaking spaces pasted
//! from HTML views.

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NON_BREAKING_SPACE: char = '\u{00A0}';

/// Normalize raw text into a list of lines.
///
/// `\r\n`, `\n` and lone `\r` all end a line. Byte-order marks are dropped,
/// a trailing non-breaking space is removed and any other becomes a plain
/// space.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    text.split('\n')
        .map(|line| {
            line.replace(BYTE_ORDER_MARK, "")
                .trim_end_matches(NON_BREAKING_SPACE)
                .replace(NON_BREAKING_SPACE, " ")
        })
        .collect()
}

/// A line that holds nothing but whitespace
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A folded line: indented and not blank, continuing the previous value
#[must_use]
pub fn is_folded(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !is_blank(line)
}

/// Append a continuation line to a header value.
///
/// Folded whitespace collapses to a single space; an unindented wrapped
/// line keeps its break so that address splitting can still see it.
pub fn fold_into(value: &mut String, line: &str) {
    let folded = is_folded(line);
    let line = line.trim();

    if value.is_empty() {
        value.push_str(line);
    } else if folded {
        value.push(' ');
        value.push_str(line);
    } else {
        value.push('\n');
        value.push_str(line);
    }
}

/// Join lines back into text
#[must_use]
pub fn join(lines: &[String]) -> String {
    lines.join("\n")
}

/// Drop blank lines at both ends, keeping interior ones
#[must_use]
pub fn trim_blank(lines: &[String]) -> &[String] {
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |i| i + 1);

    &lines[start..end]
}
