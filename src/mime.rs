//! Whole-message adapter
//!
//! Reads an RFC-822 message with `mailparse`, takes its Subject header and
//! first `text/plain` part, and hands both to the forward parser. MIME
//! handling stays in `mailparse`; nothing here inspects structure beyond
//! picking the part.

use crate::error::{ParseError, Result};
use crate::parser::ForwardParser;
use crate::types::ForwardResult;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::debug;

/// Parse raw message bytes with default options
pub fn read_message(raw: &[u8]) -> Result<ForwardResult> {
    ForwardParser::default().read_message(raw)
}

impl ForwardParser {
    /// Parse raw message bytes and inspect the plain-text body
    pub fn read_message(&self, raw: &[u8]) -> Result<ForwardResult> {
        let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

        let subject = parsed.headers.get_first_value("Subject");
        let body = plain_text_body(&parsed)?.ok_or(ParseError::MissingBody)?;

        debug!(subject = ?subject, parts = parsed.subparts.len(), "read message");

        Ok(self.read(&body, subject.as_deref()))
    }
}

// First text/plain leaf, depth first. A bare message without a content type
// counts as text/plain.
fn plain_text_body(part: &ParsedMail) -> Result<Option<String>> {
    if part.subparts.is_empty() {
        if !part.ctype.mimetype.eq_ignore_ascii_case("text/plain") {
            return Ok(None);
        }

        return part
            .get_body()
            .map(Some)
            .map_err(|e| ParseError::Decode(e.to_string()));
    }

    for sub in &part.subparts {
        if let Some(body) = plain_text_body(sub)? {
            return Ok(Some(body));
        }
    }

    Ok(None)
}
