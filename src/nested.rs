//! Nested forward resolution
//!
//! A forwarded body can itself hold a forward, and so on. Each level is
//! found by running detection again on the previous level's body. The walk
//! is iterative and capped, so adversarial input with thousands of quoted
//! markers costs at most `max_depth` passes.

use crate::types::Email;
use tracing::{debug, trace};

/// Walk the forwards nested inside `body`, outermost first.
///
/// `extract` runs one level of detection and returns the envelope found in
/// the given text, if any. Text below the last level reached stays inside
/// that level's body untouched.
pub fn resolve<F>(body: &str, max_depth: usize, mut extract: F) -> Vec<Email>
where
    F: FnMut(&str) -> Option<Email>,
{
    let mut levels: Vec<Email> = Vec::new();

    while levels.len() < max_depth {
        let text = levels.last().map_or(body, |email| email.body.as_str());
        let Some(email) = extract(text) else {
            break;
        };

        trace!(depth = levels.len() + 1, subject = ?email.subject, "nested forward");
        levels.push(email);
    }

    if levels.len() == max_depth {
        debug!(max_depth, "nested forward depth cap reached");
    }

    levels
}
