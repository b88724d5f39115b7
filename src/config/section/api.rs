//! `[api]` section configuration.
//!
//! Network settings for URL intake.
//!
//! # Example
//!
//! ```toml
//! [api]
//! cors_proxy = "https://api.allorigins.win/get?url="   # relay used after a failed direct fetch
//! timeout_secs = 15                                    # optional, network default when unset
//! ```
//!
//! The relay is called as `<cors_proxy><percent-encoded url>` and must answer
//! with a JSON envelope whose `contents` field holds the fetched text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Public relay used when the direct request fails.
pub const DEFAULT_CORS_PROXY: &str = "https://api.allorigins.win/get?url=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Relay URL prefix; the target URL is appended percent-encoded.
    pub cors_proxy: String,

    /// Global request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_proxy: DEFAULT_CORS_PROXY.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub const CORS_PROXY: FieldPath = FieldPath::new("api.cors_proxy");
    pub const TIMEOUT_SECS: FieldPath = FieldPath::new("api.timeout_secs");

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.cors_proxy) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {}
            Ok(u) => diag.error(
                Self::CORS_PROXY,
                format!("unsupported scheme `{}`", u.scheme()),
            ),
            Err(e) => diag.error_with_hint(
                Self::CORS_PROXY,
                format!("not a valid URL: {e}"),
                format!("e.g. cors_proxy = \"{DEFAULT_CORS_PROXY}\""),
            ),
        }

        if self.timeout_secs == Some(0) {
            diag.error_with_hint(
                Self::TIMEOUT_SECS,
                "timeout must be greater than 0",
                "remove the field to use the network default",
            );
        }
    }
}
