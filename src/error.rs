//! Error types for forward parsing
//!
//! The detection engine itself never fails. Errors only come from the
//! RFC-822 adapter and from loading parser options.

use thiserror::Error;

/// Errors that can occur around forward parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode message content
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Message has no plain-text part to inspect
    #[error("Message has no text/plain body")]
    MissingBody,

    /// Invalid parser option
    #[error("Invalid option {field}: {details}")]
    InvalidOptions { field: String, details: String },
}

/// Result type for forward parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
