//! Parser configuration

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// Deepest nesting walked unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Name length that counts as "wrapped by the client" unless configured
pub const DEFAULT_WRAP_WIDTH: usize = 60;

const MAX_DEPTH_LIMIT: usize = 64;
const MIN_WRAP_WIDTH: usize = 20;

/// Tunables for [`ForwardParser`](crate::ForwardParser)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserOptions {
    /// Cap on nested forward levels inspected below the outer one
    pub max_depth: usize,

    /// Minimum length of a name line for the wrapped name/address join
    pub wrap_width: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Load options from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|e| ParseError::InvalidOptions {
            field: "json".into(),
            details: e.to_string(),
        })?;

        options.validate()?;
        Ok(options)
    }

    /// Check every option is within its accepted range
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ParseError::InvalidOptions {
                field: "max_depth".into(),
                details: format!("must be between 1 and {MAX_DEPTH_LIMIT}, got {}", self.max_depth),
            });
        }

        if self.wrap_width < MIN_WRAP_WIDTH {
            return Err(ParseError::InvalidOptions {
                field: "wrap_width".into(),
                details: format!("must be at least {MIN_WRAP_WIDTH}, got {}", self.wrap_width),
            });
        }

        Ok(())
    }
}
