//! Forward detection entry points

use crate::headers::{self, HeaderBlock};
use crate::lines;
use crate::mailbox::{parse_mailboxes, parse_sender};
use crate::nested;
use crate::options::ParserOptions;
use crate::patterns::FORWARD_SUBJECT;
use crate::quote;
use crate::separator::{self, Separator};
use crate::types::{Email, ForwardResult};
use tracing::{Level, debug};

/// Detect a forwarded message in `body` with default options.
///
/// `subject` is the subject of the mail itself, for clients that only mark
/// the forward there (Outlook). When given without a forward prefix the
/// mail is treated as not forwarded; a blank subject is ignored.
#[must_use]
pub fn read(body: &str, subject: Option<&str>) -> ForwardResult {
    ForwardParser::default().read(body, subject)
}

/// Strip a forward prefix (`Fwd:`, `TR:`, `WG:`...) from a subject.
///
/// Returns `None` when the subject does not mark a forward.
#[must_use]
pub fn parse_subject(subject: &str) -> Option<String> {
    let subject = subject.trim();
    let first_line = subject.lines().next().unwrap_or_default();

    FORWARD_SUBJECT
        .captures(first_line)
        .and_then(|caps| caps.name("subject"))
        .map(|m| m.as_str().trim().to_string())
}

/// Forward parser with explicit options
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardParser {
    options: ParserOptions,
}

impl ForwardParser {
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Detect a forwarded message and extract its envelope
    #[must_use]
    pub fn read(&self, body: &str, subject: Option<&str>) -> ForwardResult {
        let Some((email, message)) = self.read_outer(body, subject) else {
            return ForwardResult::not_forwarded();
        };

        if tracing::enabled!(Level::DEBUG) {
            let nested = self.resolve_nested(&email.body);
            debug!(
                subject = ?email.subject,
                nested = nested.len(),
                has_message = message.is_some(),
                "forwarded email parsed"
            );
        }

        ForwardResult::forwarded(email, message)
    }

    /// Every forwarded envelope in `body`, outermost first.
    ///
    /// The first entry is the `email` that [`read`](Self::read) returns;
    /// the rest are the forwards nested inside its body, each keeping its
    /// own body verbatim.
    #[must_use]
    pub fn read_chain(&self, body: &str, subject: Option<&str>) -> Vec<Email> {
        let Some((outer, _)) = self.read_outer(body, subject) else {
            return Vec::new();
        };

        let nested = self.resolve_nested(&outer.body);
        let mut chain = Vec::with_capacity(nested.len() + 1);
        chain.push(outer);
        chain.extend(nested);
        chain
    }

    // Outer level, gated by the mail's own subject. A blank subject counts
    // as no subject.
    fn read_outer(&self, body: &str, subject: Option<&str>) -> Option<(Email, Option<String>)> {
        let forwarded_subject = match subject.filter(|s| !s.trim().is_empty()) {
            Some(raw) => {
                let Some(parsed) = parse_subject(raw) else {
                    debug!("subject is not a forward");
                    return None;
                };
                Some(parsed)
            }
            None => None,
        };

        let (mut email, message) = self.read_level(body, forwarded_subject.is_some())?;
        if email.subject.is_none() {
            email.subject = forwarded_subject.filter(|s| !s.is_empty());
        }

        Some((email, message))
    }

    fn resolve_nested(&self, body: &str) -> Vec<Email> {
        nested::resolve(body, self.options.max_depth, |text| {
            self.read_level(text, false).map(|(email, _)| email)
        })
    }

    // One level: marker, headers, body. Returns the envelope and the text
    // typed above the marker.
    fn read_level(&self, body: &str, subject_forwarded: bool) -> Option<(Email, Option<String>)> {
        let lines = lines::tokenize(body);
        let separator = separator::detect(&lines, subject_forwarded)?;

        let message = lines::join(&lines[..separator.line]).trim().to_string();
        let message = (!message.is_empty()).then_some(message);

        let rest = forwarded_lines(&lines, separator);
        let block = header_block(&lines, separator, &rest);
        let body = quote::extract_body(&rest[block.body_start..]);

        Some((self.build_email(block, body), message))
    }

    fn build_email(&self, block: HeaderBlock, body: String) -> Email {
        let wrap_width = self.options.wrap_width;
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Email {
            subject: non_empty(block.subject),
            from: block
                .from
                .as_deref()
                .and_then(|value| parse_sender(value, wrap_width)),
            to: block
                .to
                .as_deref()
                .map(|value| parse_mailboxes(value, wrap_width))
                .unwrap_or_default(),
            cc: block
                .cc
                .as_deref()
                .map(|value| parse_mailboxes(value, wrap_width))
                .unwrap_or_default(),
            date: non_empty(block.date),
            body,
        }
    }
}

// Lines after the marker. Quote markers are removed only when the client
// quoted the forward itself: the marker line or the first header carries one.
fn forwarded_lines(lines: &[String], separator: Separator) -> Vec<String> {
    let rest = &lines[separator.header_start()..];
    let first_header = rest.iter().find(|l| !lines::is_blank(l));

    let quoted = quote::is_quoted(&lines[separator.line])
        || first_header.is_some_and(|l| quote::is_quoted(l));

    if quoted {
        quote::dequote(rest)
    } else {
        quote::unindent(rest.to_vec())
    }
}

fn header_block(lines: &[String], separator: Separator, rest: &[String]) -> HeaderBlock {
    if separator.layout.positional() {
        headers::parse_positional(quote::strip_line(&lines[separator.line]))
    } else {
        headers::parse(rest)
    }
}
