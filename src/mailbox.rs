//! Address and display-name tokenizer
//!
//! Field values come in every shape clients produce:
//!
//! - `John Doe <john.doe@acme.com>`
//! - `"Doe, John" <john.doe@acme.com>` (comma inside the quoted name)
//! - `John Doe [mailto:john.doe@acme.com]`
//! - `John Doe <john.doe@acme.com<mailto:john.doe@acme.com>>`
//! - `john.doe@acme.com` or just `John Doe`
//!
//! Lists are separated by `,`, or by `;` for clients that leave commas
//! unquoted inside names.

use crate::patterns::ADDRESS_SHAPE;
use crate::types::Address;

const SOFT_BREAK: char = '=';
const MAILTO: &str = "mailto:";

/// Parse a field value listing one or more mailboxes.
///
/// `wrap_width` bounds the line-wrap heuristic: a name on its own line at
/// least this long, followed by a bare address on the next line, is taken
/// as one mailbox that the client wrapped.
#[must_use]
pub fn parse_mailboxes(value: &str, wrap_width: usize) -> Vec<Address> {
    split_list(value)
        .iter()
        .flat_map(|token| parse_token(token, wrap_width))
        .filter(|address| !address.is_empty())
        .collect()
}

/// Parse a field value holding exactly one mailbox (From).
///
/// Commas are not separators here: `John, Doe <john.doe@acme.com>` is a
/// single sender.
#[must_use]
pub fn parse_sender(value: &str, wrap_width: usize) -> Option<Address> {
    parse_token(value.trim(), wrap_width)
        .into_iter()
        .find(|address| !address.is_empty())
}

/// Parse a single mailbox token
#[must_use]
pub fn parse_mailbox(token: &str) -> Address {
    let token = token.trim();

    if let Some((name, address)) = split_bracketed(token) {
        return Address::new(Some(&strip_name_quotes(&name)), Some(&address));
    }

    let bare = token.strip_prefix(MAILTO).unwrap_or(token);
    if ADDRESS_SHAPE.is_match(bare) {
        return Address::from_address(bare);
    }

    Address::from_name(&strip_name_quotes(token))
}

/// Split on the list separator, ignoring separators inside quotes and
/// brackets. `;` wins when present, as its clients keep bare commas in
/// names.
fn split_list(value: &str) -> Vec<String> {
    let tokens = split_top_level(value, ';');
    if tokens.len() > 1 {
        return tokens;
    }

    split_top_level(value, ',')
}

fn split_top_level(value: &str, separator: char) -> Vec<String> {
    let mut literal = Vec::new();

    loop {
        match split_masked(value, separator, &literal) {
            Ok(tokens) => return tokens,
            // An opener that never closes is plain text; retry without it
            Err(unclosed) => literal.push(unclosed),
        }
    }
}

// Split outside quotes and brackets. Openers at the byte offsets in
// `literal` are ordinary characters. Fails with the offset of the outermost
// opener left unclosed.
fn split_masked(value: &str, separator: char, literal: &[usize]) -> Result<Vec<String>, usize> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut closing: Vec<(char, usize)> = Vec::new();

    for (offset, ch) in value.char_indices() {
        let open = closing.last().map(|&(expected, _)| expected);

        match (ch, open) {
            (c, Some(expected)) if c == expected => {
                closing.pop();
            }
            // Quotes do not nest
            (_, Some('"' | '\'' | '»' | '”')) => {}
            _ if literal.contains(&offset) => {}
            // A single quote opens a name only at the start of a token, so
            // apostrophes inside names stay literal
            ('\'', _) if current.trim().is_empty() => closing.push(('\'', offset)),
            ('"', _) => closing.push(('"', offset)),
            ('«', _) => closing.push(('»', offset)),
            ('„', _) => closing.push(('”', offset)),
            ('<', _) => closing.push(('>', offset)),
            ('[', _) => closing.push((']', offset)),
            (c, None) if c == separator => {
                push_token(&mut out, &current);
                current.clear();
                continue;
            }
            _ => {}
        }

        current.push(ch);
    }

    if let Some(&(_, offset)) = closing.first() {
        return Err(offset);
    }

    push_token(&mut out, &current);
    Ok(out)
}

fn push_token(out: &mut Vec<String>, token: &str) {
    let token = token.trim();
    if !token.is_empty() {
        out.push(token.to_string());
    }
}

fn parse_token(token: &str, wrap_width: usize) -> Vec<Address> {
    if !token.contains('\n') {
        return vec![parse_mailbox(token)];
    }

    let joined = token.split_whitespace().collect::<Vec<_>>().join(" ");
    if split_bracketed(&joined).is_some() {
        return vec![parse_mailbox(&joined)];
    }

    let segments: Vec<&str> = token
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if let [name, address] = segments.as_slice()
        && is_wrapped_name(name, wrap_width)
        && ADDRESS_SHAPE.is_match(address)
    {
        let name = name.trim_end_matches(SOFT_BREAK);
        return vec![Address::new(Some(&strip_name_quotes(name)), Some(*address))];
    }

    segments.iter().map(|s| parse_mailbox(s)).collect()
}

// Best effort: a wrapped name carries either a soft-break marker or enough
// length to have pushed the address onto the next line. Short names with
// neither signal are indistinguishable from a name-only entry followed by an
// address-only entry.
fn is_wrapped_name(segment: &str, wrap_width: usize) -> bool {
    if ADDRESS_SHAPE.is_match(segment) {
        return false;
    }

    segment.ends_with(SOFT_BREAK) || segment.chars().count() >= wrap_width
}

/// Split `Name <address>` / `Name [mailto:address]` into its parts
fn split_bracketed(token: &str) -> Option<(String, String)> {
    let open = token.find(['<', '['])?;
    let close_char = if token[open..].starts_with('<') { '>' } else { ']' };
    let close = token.rfind(close_char).filter(|&c| c > open)?;

    let inner = &token[open + 1..close];
    let inner = inner.find("<mailto:").map_or(inner, |i| &inner[..i]);
    let inner = inner.trim();
    let address = inner.strip_prefix(MAILTO).unwrap_or(inner).trim();

    if !address.contains('@') {
        return None;
    }

    Some((token[..open].trim().to_string(), address.to_string()))
}

/// Strip enclosing quote characters, keeping inner punctuation verbatim
fn strip_name_quotes(name: &str) -> String {
    let mut name = name.trim();

    for (open, close) in [('"', '"'), ('\'', '\''), ('«', '»'), ('„', '”')] {
        if let Some(inner) = name
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            name = inner.trim();
        }
    }

    name.to_string()
}
