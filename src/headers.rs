//! Header block parser
//!
//! Maps the localized `Label: value` lines under a forward marker onto the
//! canonical envelope fields. Values stay raw; mailbox tokenization happens
//! later.

use crate::lines;
use crate::patterns::{self, Field, GENERIC_LABEL, OUTLOOK_2019};
use tracing::trace;

/// Raw envelope fields plus where the forwarded body begins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    pub from: Option<String>,
    pub to: Option<String>,
    pub cc: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,

    /// Index of the first body line, relative to the parsed slice
    pub body_start: usize,
}

impl HeaderBlock {
    fn slot(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::From => Some(&mut self.from),
            Field::To => Some(&mut self.to),
            Field::Cc => Some(&mut self.cc),
            Field::Subject => Some(&mut self.subject),
            Field::Date => Some(&mut self.date),
            Field::ReplyTo => None,
        }
    }

    fn set(&mut self, field: Field, value: &str) {
        trace!(?field, value, "header field");
        if let Some(slot) = self.slot(field) {
            *slot = Some(value.trim().to_string());
        }
    }

    fn extend(&mut self, field: Field, line: &str) {
        if let Some(Some(value)) = self.slot(field) {
            lines::fold_into(value, line);
        }
    }

    fn value(&self, field: Field) -> &str {
        let value = match field {
            Field::From => self.from.as_deref(),
            Field::To => self.to.as_deref(),
            Field::Cc => self.cc.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::ReplyTo => None,
        };
        value.unwrap_or_default()
    }
}

/// Parse a delimited header block.
///
/// `lines` starts right after the marker, or at the marker itself for
/// clients that put the first header on it. Leading blank lines are
/// skipped; the block ends at the first blank line or at the first line that
/// is neither a label nor a continuation. When a label repeats, the last
/// occurrence wins.
#[must_use]
pub fn parse(lines: &[String]) -> HeaderBlock {
    let mut block = HeaderBlock::default();
    let mut current: Option<Field> = None;
    let mut seen = false;

    let start = lines
        .iter()
        .position(|l| !lines::is_blank(l))
        .unwrap_or(lines.len());
    let mut index = start;

    while let Some(line) = lines.get(index) {
        if lines::is_blank(line) {
            break;
        }

        if let Some((field, value)) = patterns::match_label(line) {
            block.set(field, value);
            current = (field != Field::ReplyTo).then_some(field);
            seen = true;
        } else if seen && GENERIC_LABEL.is_match(line) {
            // Unknown header, e.g. X-Mailer or Importance
            current = None;
        } else if let Some(field) = current
            && continues(field, block.value(field), line)
        {
            block.extend(field, line);
        } else if !(seen && current.is_none() && lines::is_folded(line)) {
            break;
        }

        index += 1;
    }

    block.body_start = if seen { index } else { start };
    block
}

/// Map an Outlook 2019 reply-style marker onto sender and date.
///
/// The body starts on the line after the marker.
#[must_use]
pub fn parse_positional(marker: &str) -> HeaderBlock {
    let Some(caps) = OUTLOOK_2019.iter().find_map(|r| r.captures(marker)) else {
        return HeaderBlock::default();
    };

    let name = caps.name("name").map_or("", |m| m.as_str().trim());
    let address = caps.name("address").map_or("", |m| m.as_str().trim());

    HeaderBlock {
        from: Some(format!("{name} <{address}>")),
        date: caps.name("date").map(|m| m.as_str().trim().to_string()),
        ..HeaderBlock::default()
    }
}

// Continuation lines: folded (indented), the value of a label left empty, or
// an address list the client visibly wrapped.
fn continues(field: Field, value: &str, line: &str) -> bool {
    if lines::is_folded(line) || value.is_empty() {
        return true;
    }
    if !field.is_mailbox() {
        return false;
    }

    let unclosed = value.matches('<').count() > value.matches('>').count();
    unclosed || value.ends_with([',', ';', '<', '=']) || line.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(text: &str) -> Vec<String> {
        text.lines().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let lines = to_lines("\nFrom: a@b.c\nSubject: Hi\n\nBody");
        let block = parse(&lines);
        assert_eq!(block.from.as_deref(), Some("a@b.c"));
        assert_eq!(block.subject.as_deref(), Some("Hi"));
        assert_eq!(block.body_start, 3);
    }

    #[test]
    fn test_parse_last_label_wins() {
        let lines = to_lines("From: Someone\nFrom: John Doe <john.doe@acme.com>\n\nBody");
        let block = parse(&lines);
        assert_eq!(block.from.as_deref(), Some("John Doe <john.doe@acme.com>"));
    }

    #[test]
    fn test_parse_wrapped_address_list() {
        let lines = to_lines("Cc: A <a@acme.com>, B <\nb@acme.com>\nSubject: Hi\n\nBody");
        let block = parse(&lines);
        assert_eq!(block.cc.as_deref(), Some("A <a@acme.com>, B <\nb@acme.com>"));
        assert_eq!(block.subject.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_parse_value_on_next_line() {
        let lines = to_lines("Subject:\nHello there\n\nBody");
        let block = parse(&lines);
        assert_eq!(block.subject.as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_parse_skips_unknown_headers() {
        let lines = to_lines("From: a@b.c\nX-Mailer: Foo\n  folded\nTo: d@e.f\n\nBody");
        let block = parse(&lines);
        assert_eq!(block.to.as_deref(), Some("d@e.f"));
        assert_eq!(block.body_start, 4);
    }

    #[test]
    fn test_parse_without_labels() {
        let lines = to_lines("\nJust a body\nline");
        let block = parse(&lines);
        assert_eq!(block, HeaderBlock { body_start: 1, ..HeaderBlock::default() });
    }

    #[test]
    fn test_parse_positional() {
        let block = parse_positional(
            r#"On Tue, 7 Apr 2020 at 11:47, "John Doe" <john.doe@acme.com> wrote:"#,
        );
        assert_eq!(block.from.as_deref(), Some("John Doe <john.doe@acme.com>"));
        assert_eq!(block.date.as_deref(), Some("Tue, 7 Apr 2020 at 11:47"));
    }
}
