//! HEAD existence probe.
//!
//! Uses the curl crate (libcurl) to ask whether a URL currently resolves to
//! live content, so a requester claiming a URL as "new" can be warned that it
//! already exists. Advisory only: any failure (bad URL, DNS, timeout) is
//! reported in the result, never returned as an error. Runs in the current
//! thread; call from `spawn_blocking` if used from async code.

use std::time::Duration;

use serde::Serialize;

use crate::config::ProbeConfig;

/// Outcome of a reachability probe. `exists` is true only for a 2xx status.
/// Transport failures and confirmed non-existence are deliberately not
/// distinguished beyond the `error` diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct ExistsReport {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExistsReport {
    fn absent() -> Self {
        Self {
            exists: false,
            status: None,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            exists: false,
            status: None,
            error: Some(error),
        }
    }
}

/// Performs a HEAD request against `url` and reports whether it responded
/// with a success status. Infallible by contract.
pub fn check_exists(url: &str, cfg: &ProbeConfig) -> ExistsReport {
    if url.is_empty() {
        return ExistsReport::absent();
    }
    if let Err(e) = url::Url::parse(url) {
        return ExistsReport::failed(format!("invalid URL: {}", e));
    }

    match head_status(url, cfg) {
        Ok(code) => ExistsReport {
            exists: (200..300).contains(&code),
            status: Some(code),
            error: None,
        },
        Err(e) => {
            tracing::debug!("existence probe failed for {}: {}", url, e);
            ExistsReport::failed(e.to_string())
        }
    }
}

/// HEAD request returning the final response code (after redirects, if
/// enabled in config).
fn head_status(url: &str, cfg: &ProbeConfig) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(cfg.follow_redirects)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;
    easy.perform()?;
    easy.response_code()
}
