//! Core types for forward parsing results

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of inspecting an email body for forwarded content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForwardResult {
    /// Whether a forward marker was recognized
    pub forwarded: bool,

    /// The forwarded envelope and content, present iff `forwarded`
    pub email: Option<Email>,

    /// Text typed by the forwarder above the marker
    pub message: Option<String>,
}

impl ForwardResult {
    /// Result for mail that carries no forwarded content
    #[must_use]
    pub const fn not_forwarded() -> Self {
        Self {
            forwarded: false,
            email: None,
            message: None,
        }
    }

    /// Result for a recognized forward
    #[must_use]
    pub const fn forwarded(email: Email, message: Option<String>) -> Self {
        Self {
            forwarded: true,
            email: Some(email),
            message,
        }
    }
}

/// The forwarded envelope plus its body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    /// Original subject
    pub subject: Option<String>,

    /// Original sender
    pub from: Option<Address>,

    /// Original recipients, in order of appearance
    pub to: Vec<Address>,

    /// Original carbon-copy recipients, in order of appearance
    pub cc: Vec<Address>,

    /// Date as written by the forwarding client
    pub date: Option<String>,

    /// Forwarded content, quote markers removed
    pub body: String,
}

impl Email {
    /// Best-effort interpretation of `date` as a timestamp.
    ///
    /// Only machine formats are tried (RFC 2822, RFC 3339). Localized dates
    /// such as `2 April 2020 at 11:37:47 CEST` return `None`.
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.date.as_deref()?.trim();

        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
    }

    /// Whether any envelope field was recovered
    #[must_use]
    pub const fn has_envelope(&self) -> bool {
        self.subject.is_some()
            || self.from.is_some()
            || self.date.is_some()
            || !self.to.is_empty()
            || !self.cc.is_empty()
    }
}

/// Mailbox with an optional display name and an optional address
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Address {
    /// Display name (e.g., "John Doe")
    pub name: Option<String>,

    /// Email address (e.g., "john.doe@acme.com")
    pub address: Option<String>,
}

impl Address {
    /// Build an address from raw parts.
    ///
    /// Both parts are trimmed; empty parts become `None`, and a name that
    /// merely repeats the address is dropped.
    #[must_use]
    pub fn new(name: Option<&str>, address: Option<&str>) -> Self {
        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(ToString::to_string);

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .filter(|n| address.as_deref() != Some(*n))
            .map(ToString::to_string);

        Self { name, address }
    }

    /// Address-only mailbox
    #[must_use]
    pub fn from_address(address: &str) -> Self {
        Self::new(None, Some(address))
    }

    /// Name-only mailbox
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::new(Some(name), None)
    }

    /// True when neither part is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }

    /// Domain part of the address, if any
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.address
            .as_deref()
            .and_then(|a| a.rsplit_once('@'))
            .map(|(_, domain)| domain)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.address) {
            (Some(name), Some(address)) => write!(f, "{name} <{address}>"),
            (None, Some(address)) => write!(f, "{address}"),
            (Some(name), None) => write!(f, "{name}"),
            (None, None) => Ok(()),
        }
    }
}
