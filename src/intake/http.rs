//! HTTP access for URL intake.
//!
//! [`HttpClient`] is the seam between fetch logic and the network. The
//! production client is a thin `ureq` wrapper; non-2xx statuses come back as
//! ordinary responses so the caller decides what counts as failure.

use std::time::Duration;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET.
///
/// `Err` is reserved for transport failures (DNS, TLS, timeouts, body
/// decoding); HTTP error statuses are returned as `Ok`.
pub trait HttpClient {
    fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, String>;
}

/// `ureq`-backed client.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// `timeout` bounds the whole request; `None` keeps ureq's defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, String> {
        let mut request = self.agent.get(url);
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }

        let mut response = request.call().map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| e.to_string())?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory client for tests.

    use super::{HttpClient, HttpResponse};
    use parking_lot::Mutex;
    use rustc_hash::FxHashMap;

    /// Serves canned responses by exact URL and records every request.
    #[derive(Default)]
    pub struct FakeClient {
        routes: FxHashMap<String, Result<HttpResponse, String>>,
        pub requests: Mutex<Vec<(String, Option<String>)>>,
    }

    impl FakeClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes.insert(
                url.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn fail(mut self, url: &str, error: &str) -> Self {
            self.routes.insert(url.to_string(), Err(error.to_string()));
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.lock().iter().map(|(u, _)| u.clone()).collect()
        }
    }

    impl HttpClient for FakeClient {
        fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, String> {
            self.requests
                .lock()
                .push((url.to_string(), accept.map(str::to_string)));
            self.routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("connection refused: {url}")))
        }
    }
}
