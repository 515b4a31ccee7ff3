// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Forwarded Email Parser
//!
//! Detects whether a plain-text email body embeds a forwarded message and
//! extracts the original envelope (sender, recipients, subject, date), the
//! forwarded body and the note typed above it.
//!
//! # Features
//!
//! - Apple Mail, Gmail, Outlook (Live, 2013, 2019, new 2019), Yahoo Mail,
//!   Thunderbird, `HubSpot`, Missive, `MailMate` and IONOS layouts
//! - Header labels in twenty-plus locales
//! - Quoted names with commas, `mailto:` brackets, name-only and
//!   address-only mailboxes
//! - Quote markers removed from forwards the client quoted
//! - Nested forwards, walked up to a configurable depth
//!
//! # Example
//!
//! ```rust
//! use email_forward_parser::read;
//!
//! let body = "Please see below.\n\n\
//!             ---------- Forwarded message ---------\n\
//!             From: John Doe <john.doe@acme.com>\n\
//!             To: bessie.berry@acme.com\n\
//!             Subject: Hello\n\
//!             \n\
//!             Hi there";
//!
//! let result = read(body, None);
//! let email = result.email.unwrap();
//!
//! assert!(result.forwarded);
//! assert_eq!(result.message.as_deref(), Some("Please see below."));
//! assert_eq!(email.subject.as_deref(), Some("Hello"));
//! assert_eq!(email.body, "Hi there");
//! ```

mod error;
mod headers;
mod lines;
mod mailbox;
mod mime;
mod nested;
mod options;
mod parser;
mod patterns;
mod quote;
mod separator;
mod types;

pub use error::{ParseError, Result};
pub use mailbox::{parse_mailbox, parse_mailboxes};
pub use mime::read_message;
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_WRAP_WIDTH, ParserOptions};
pub use parser::{ForwardParser, parse_subject, read};
pub use quote::strip_quotes;
pub use types::*;
