//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! TelemetryClient (envelope JSON + identity headers)
//!     → DispatchRequest
//!     → Transport::post (one attempt, no retry)
//!     → TransportResponse (status + body text)
//! ```
//!
//! # Design Decisions
//! - Transport is a trait so hosts and tests can supply their own
//! - Status interpretation belongs to the client, not the transport
//! - Timeouts are whatever the transport implementation enforces

pub mod http;

use std::future::Future;

use crate::client::DispatchError;
use crate::config::ClientConfig;

pub use http::HttpTransport;

/// Header carrying the API key.
pub const HEADER_API_KEY: &str = "x-orbitrace-api-key";

/// Header carrying the organization id.
pub const HEADER_ORG_ID: &str = "x-orbitrace-org-id";

/// Header carrying the project id.
pub const HEADER_PROJECT_ID: &str = "x-orbitrace-project-id";

/// A single outbound JSON POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    /// Target URL.
    pub endpoint: String,
    /// Identity headers. `Content-Type` is added by the transport.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body.
    pub body: String,
}

impl DispatchRequest {
    /// Build a request carrying the identity headers of `config`.
    pub fn new(config: &ClientConfig, body: String) -> Self {
        Self {
            endpoint: config.endpoint().to_string(),
            headers: vec![
                (HEADER_API_KEY, config.api_key().to_string()),
                (HEADER_ORG_ID, config.org_id().to_string()),
                (HEADER_PROJECT_ID, config.project_id().to_string()),
            ],
            body,
        }
    }

    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response from the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to POST a JSON document and read back status and body.
///
/// Implementations report connection-level failures (DNS, refused, timeout)
/// as `Err`; any HTTP status, including errors, is an `Ok` response.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        request: &DispatchRequest,
    ) -> impl Future<Output = Result<TransportResponse, DispatchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate, RawConfig};

    #[test]
    fn test_request_carries_identity_headers() {
        let raw = RawConfig::new("k", "o", "p", "https://collect.example/v1");
        let config = validate(&raw).unwrap();
        let request = DispatchRequest::new(&config, "{}".to_string());
        assert_eq!(request.endpoint, "https://collect.example/v1");
        assert_eq!(request.header("x-orbitrace-api-key"), Some("k"));
        assert_eq!(request.header("X-Orbitrace-Org-Id"), Some("o"));
        assert_eq!(request.header(HEADER_PROJECT_ID), Some("p"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn test_success_range() {
        let ok = |status| TransportResponse { status, body: String::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(!ok(199));
        assert!(!ok(301));
        assert!(!ok(500));
    }
}
