//! Telemetry client.
//!
//! # Responsibilities
//! - Own one validated `ClientConfig`
//! - Build exception and message events
//! - Dispatch each event with exactly one transport attempt
//!
//! # Design Decisions
//! - Construction is the only validation gate
//! - Failures are logged, then returned to the caller as `DispatchError`
//! - A disabled client returns `CaptureOutcome::Disabled` without sending

use std::time::Instant;

use serde_json::Value;

use crate::client::event::{CapturedError, Envelope, EventKind, Metadata};
use crate::client::types::{CaptureOutcome, CaptureResult, DispatchError};
use crate::config::{validate, ClientConfig, ConfigResult, RawConfig};
use crate::observability::metrics;
use crate::transport::{DispatchRequest, HttpTransport, Transport};

/// Telemetry reporter bound to a single configuration.
pub struct TelemetryClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl TelemetryClient<HttpTransport> {
    /// Create a client that posts over HTTPS with reqwest defaults.
    pub fn new(raw: &RawConfig) -> ConfigResult<Self> {
        Self::with_transport(raw, HttpTransport::new())
    }
}

impl<T: Transport> TelemetryClient<T> {
    /// Create a client that dispatches through `transport`.
    pub fn with_transport(raw: &RawConfig, transport: T) -> ConfigResult<Self> {
        let config = validate(raw)?;
        Ok(Self { config, transport })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Report an error.
    ///
    /// Accepts anything convertible into a [`CapturedError`]: message text,
    /// `&dyn Error`, or a value built with [`CapturedError::from_error`].
    pub async fn capture_exception(
        &self,
        error: impl Into<CapturedError>,
        metadata: Metadata,
    ) -> CaptureResult {
        let error = error.into();
        if self.config.is_disabled() {
            return Ok(self.skip(EventKind::CaptureException));
        }

        let envelope = Envelope::exception(error, metadata, &self.config);
        self.dispatch(envelope).await
    }

    /// Report a plain message.
    pub async fn capture_message(
        &self,
        message: impl Into<String>,
        metadata: Metadata,
    ) -> CaptureResult {
        let message = message.into();
        if self.config.is_disabled() {
            return Ok(self.skip(EventKind::CaptureMessage));
        }

        let envelope = Envelope::message(message, metadata, &self.config);
        self.dispatch(envelope).await
    }

    fn skip(&self, kind: EventKind) -> CaptureOutcome {
        tracing::info!(
            event = %kind,
            service = %self.config.service(),
            "Orbitrace: Logging is disabled"
        );
        metrics::record_event(kind, metrics::OUTCOME_DISABLED);
        CaptureOutcome::Disabled
    }

    async fn dispatch(&self, envelope: Envelope) -> CaptureResult {
        let kind = envelope.event;
        let start = Instant::now();
        let result = self.send(&envelope).await;
        metrics::record_dispatch_duration(kind, start);

        match result {
            Ok(body) => {
                metrics::record_event(kind, metrics::OUTCOME_DELIVERED);
                tracing::debug!(
                    event = %kind,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Event delivered"
                );
                Ok(CaptureOutcome::Delivered(body))
            }
            Err(e) => {
                metrics::record_event(kind, metrics::OUTCOME_FAILED);
                tracing::error!(
                    event = %kind,
                    endpoint = %self.config.endpoint(),
                    error = %e,
                    "Orbitrace: Error sending data to API"
                );
                Err(e)
            }
        }
    }

    async fn send(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let body = serde_json::to_string(envelope).map_err(DispatchError::Serialize)?;
        let request = DispatchRequest::new(&self.config, body);

        let response = self.transport.post(&request).await?;
        if !response.is_success() {
            return Err(DispatchError::Status {
                status: response.status,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(DispatchError::InvalidResponse)
    }
}

impl<T: Transport> std::fmt::Debug for TelemetryClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
