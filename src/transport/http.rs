//! HTTP transport backed by reqwest.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::client::DispatchError;
use crate::transport::{DispatchRequest, Transport, TransportResponse};

/// reqwest-based transport. Cloning shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with reqwest defaults (no request timeout).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport that aborts requests after `timeout`.
    ///
    /// Fails only if reqwest cannot build its client (e.g. no TLS backend).
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: &DispatchRequest) -> Result<TransportResponse, DispatchError> {
        let url = Url::parse(&request.endpoint).map_err(|e| DispatchError::InvalidEndpoint {
            endpoint: request.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let resp = builder
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
