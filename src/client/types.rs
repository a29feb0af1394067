//! Capture outcomes and dispatch errors.

use serde_json::Value;
use thiserror::Error;

/// Result of a capture call that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// The collector accepted the event; holds its JSON response verbatim.
    Delivered(Value),
    /// The client is disabled; nothing was sent.
    Disabled,
}

impl CaptureOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, CaptureOutcome::Delivered(_))
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, CaptureOutcome::Disabled)
    }

    /// The collector's response body, if the event was delivered.
    pub fn into_response(self) -> Option<Value> {
        match self {
            CaptureOutcome::Delivered(body) => Some(body),
            CaptureOutcome::Disabled => None,
        }
    }
}

/// Errors from a single dispatch attempt. Never affect client state.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The event could not be encoded as JSON.
    #[error("Failed to serialize event: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Connection, DNS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The collector answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The collector answered with success but the body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

/// Result type of `capture_exception` / `capture_message`.
pub type CaptureResult = Result<CaptureOutcome, DispatchError>;
