//! URL intake with a single CORS-relay fallback.
//!
//! ```text
//! GET <url> ──ok + looks like SVG──► content
//!     │
//!     └─any failure──► GET <proxy><encoded url> ──► JSON { contents } ──► content
//!                          │
//!                          └─any failure──► FetchFailed
//! ```
//!
//! No backoff and no further retries.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use super::http::HttpClient;
use super::{IntakeError, status_message};
use crate::debug;

/// Accept header sent on the direct request.
pub const SVG_ACCEPT: &str = "image/svg+xml,image/*,*/*;q=0.8";

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// JSON envelope returned by the relay.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: Option<String>,
}

/// Fetch sprite text from `url`, falling back to `proxy_base` once.
pub fn fetch_svg(
    client: &dyn HttpClient,
    url: &str,
    proxy_base: &str,
) -> Result<String, IntakeError> {
    let direct = match fetch_direct(client, url) {
        Ok(content) => return Ok(content),
        Err(e) => e,
    };
    debug!("fetch"; "direct fetch failed: {}", direct);

    fetch_via_proxy(client, url, proxy_base).map_err(|proxy| {
        debug!("fetch"; "proxy fetch also failed: {}", proxy);
        IntakeError::FetchFailed {
            direct: direct.to_string(),
            proxy: proxy.to_string(),
        }
    })
}

/// Relay URL for `url`.
pub fn proxy_url(proxy_base: &str, url: &str) -> String {
    format!("{proxy_base}{}", utf8_percent_encode(url, URI_COMPONENT))
}

/// Cheap check that text is SVG-ish before handing it to the parser.
pub fn looks_like_svg(content: &str) -> bool {
    content.contains("<svg") || content.contains("<symbol")
}

fn fetch_direct(client: &dyn HttpClient, url: &str) -> Result<String, IntakeError> {
    let response = client
        .get(url, Some(SVG_ACCEPT))
        .map_err(IntakeError::Http)?;
    if !response.is_success() {
        return Err(IntakeError::Http(status_message(response.status)));
    }
    checked(response.body)
}

fn fetch_via_proxy(
    client: &dyn HttpClient,
    url: &str,
    proxy_base: &str,
) -> Result<String, IntakeError> {
    let response = client
        .get(&proxy_url(proxy_base, url), None)
        .map_err(IntakeError::Http)?;
    if !response.is_success() {
        return Err(IntakeError::Http(format!(
            "Proxy fetch failed with status: {}",
            response.status
        )));
    }

    let envelope: ProxyEnvelope = serde_json::from_str(&response.body)
        .map_err(|e| IntakeError::Envelope(e.to_string()))?;
    checked(envelope.contents.unwrap_or_default())
}

fn checked(content: String) -> Result<String, IntakeError> {
    if looks_like_svg(&content) {
        Ok(content)
    } else {
        Err(IntakeError::NotSvg)
    }
}
