//! URL validation against the page-type rule table.

use serde::Serialize;
use url::Url;

use super::table::rule_for;
use super::PageType;

const MSG_REQUIRED: &str = "URL is required.";
const MSG_FORMAT: &str = "Enter a correctly formatted URL.";

/// Verdict for one URL. Failures are values, never errors: empty input,
/// malformed URL, and rule mismatch each contribute a message.
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            errors: vec![message.to_string()],
        }
    }
}

/// Validates a candidate URL against the naming rule for `page_type`.
///
/// The rule mismatch reuses the same generic format message as a parse
/// failure; the per-type `description`/`examples` are the user's guide to
/// self-correct, not the error text.
pub fn validate(url: &str, page_type: PageType) -> Validation {
    if url.is_empty() {
        return Validation::fail(MSG_REQUIRED);
    }

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("URL parse failed for {:?}: {}", url, e);
            return Validation::fail(MSG_FORMAT);
        }
    };
    // Relative-ish schemes (e.g. "mailto:") have no host; the naming rules
    // only ever apply to absolute web URLs.
    if parsed.host_str().is_none() {
        return Validation::fail(MSG_FORMAT);
    }

    if !rule_for(page_type).shape.matches(&parsed) {
        return Validation::fail(MSG_FORMAT);
    }

    Validation::ok()
}
