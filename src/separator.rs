//! Forward marker detection

use crate::patterns::{
    self, APPLE_MAIL, DASHED, Field, GMAIL, MAILMATE, ORIGINAL_MESSAGE, OUTLOOK_2019, OUTLOOK_LIVE,
};
use crate::quote;
use tracing::debug;

/// How a mail client lays out a forwarded message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `Begin forwarded message:` and its translations
    AppleMail,
    /// `---------- Forwarded message ---------` (Gmail, Missive, `HubSpot`)
    Gmail,
    /// A rule of 32 underscores (Outlook Live / 365)
    OutlookLive,
    /// `Forwarded message:`
    MailMate,
    /// `On <date>, "<name>" <address> wrote:` and its translations
    Outlook2019,
    /// Dashed localized titles (Yahoo Mail, Thunderbird, `HubSpot`)
    Dashed,
    /// `-----Original Message-----`
    OriginalMessage,
    /// No marker at all; the first `From:` line opens the block. Only
    /// trusted when the subject says the mail is a forward.
    Outlook2013,
}

impl Layout {
    /// Body-marker layouts, most specific first
    pub const PRIORITY: [Self; 7] = [
        Self::AppleMail,
        Self::Gmail,
        Self::OutlookLive,
        Self::MailMate,
        Self::Outlook2019,
        Self::Dashed,
        Self::OriginalMessage,
    ];

    /// Whether `line` is this layout's marker
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        let line = quote::strip_line(line);

        match self {
            Self::AppleMail => APPLE_MAIL.is_match(line),
            Self::Gmail => GMAIL.is_match(line),
            Self::OutlookLive => OUTLOOK_LIVE.is_match(line),
            Self::MailMate => MAILMATE.is_match(line),
            Self::Outlook2019 => OUTLOOK_2019.iter().any(|r| r.is_match(line)),
            Self::Dashed => DASHED.is_match(line),
            Self::OriginalMessage => ORIGINAL_MESSAGE.is_match(line),
            Self::Outlook2013 => matches!(patterns::match_label(line), Some((Field::From, _))),
        }
    }

    /// Headers start on the marker line itself
    #[must_use]
    pub const fn inline_headers(self) -> bool {
        matches!(self, Self::Outlook2013)
    }

    /// Envelope carried by the marker line instead of labeled headers
    #[must_use]
    pub const fn positional(self) -> bool {
        matches!(self, Self::Outlook2019)
    }
}

/// A recognized forward marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    /// Index of the marker line
    pub line: usize,

    /// Which client layout matched
    pub layout: Layout,
}

impl Separator {
    /// First line handed to the header parser
    #[must_use]
    pub const fn header_start(&self) -> usize {
        if self.layout.inline_headers() {
            self.line
        } else {
            self.line + 1
        }
    }
}

/// Find the first forward marker.
///
/// Lines are scanned top to bottom and, at each line, layouts are tried in
/// [`Layout::PRIORITY`] order. Quote markers in front of a line are ignored,
/// whatever their depth. When
/// `subject_forwarded` is set and no marker exists, the first `From:` line
/// is accepted instead.
#[must_use]
pub fn detect(lines: &[String], subject_forwarded: bool) -> Option<Separator> {
    let mut found = lines.iter().enumerate().find_map(|(line, text)| {
        Layout::PRIORITY
            .into_iter()
            .find(|layout| layout.matches(text))
            .map(|layout| Separator { line, layout })
    });

    if found.is_none() && subject_forwarded {
        found = lines
            .iter()
            .position(|text| Layout::Outlook2013.matches(text))
            .map(|line| Separator {
                line,
                layout: Layout::Outlook2013,
            });
    }

    match &found {
        Some(separator) => debug!(
            line = separator.line,
            layout = ?separator.layout,
            "forward marker found"
        ),
        None => debug!("no forward marker"),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(text: &str) -> Vec<String> {
        text.lines().map(ToString::to_string).collect()
    }

    #[test]
    fn test_first_marker_wins() {
        let lines = to_lines(
            "Hi\n-------- Forwarded Message --------\nSubject: a\n\nBegin forwarded message:",
        );
        let separator = detect(&lines, false).unwrap();
        assert_eq!(separator.line, 1);
        assert_eq!(separator.layout, Layout::Dashed);
    }

    #[test]
    fn test_quoted_apple_marker() {
        let lines = to_lines("> Begin forwarded message:\n>\n> From: a@b.c");
        let separator = detect(&lines, false).unwrap();
        assert_eq!(separator.layout, Layout::AppleMail);
        assert_eq!(separator.header_start(), 1);
    }

    #[test]
    fn test_markers_at_any_quote_depth() {
        let cases = [
            ("> ---------- Forwarded message ---------", Layout::Gmail),
            (">> Begin forwarded message:", Layout::AppleMail),
            ("> ________________________________", Layout::OutlookLive),
            (">>> -----Original Message-----", Layout::OriginalMessage),
            ("> Forwarded message:", Layout::MailMate),
        ];

        for (line, layout) in cases {
            let lines = to_lines(&format!("Thanks!\n\n{line}\n> From: a@b.c"));
            let separator = detect(&lines, false).unwrap();
            assert_eq!(separator.line, 2, "{line}");
            assert_eq!(separator.layout, layout, "{line}");
        }
    }

    #[test]
    fn test_from_line_needs_forwarded_subject() {
        let lines = to_lines("Note\n\nFrom: John Doe\nSent: Monday\n\nBody");
        assert!(detect(&lines, false).is_none());

        let separator = detect(&lines, true).unwrap();
        assert_eq!(separator.line, 2);
        assert_eq!(separator.layout, Layout::Outlook2013);
        assert_eq!(separator.header_start(), 2);
    }

    #[test]
    fn test_no_marker() {
        let lines = to_lines("Hello,\n\nJust checking in.\n\nThanks");
        assert!(detect(&lines, false).is_none());
    }
}
