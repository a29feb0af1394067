//! Event construction.
//!
//! Builds the `{event, payload}` envelope sent to the collector and merges
//! caller metadata with the metadata derived from the client config.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;

/// Caller-supplied event metadata. Key order is preserved on the wire.
pub type Metadata = serde_json::Map<String, Value>;

/// Kind of telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CaptureException,
    CaptureMessage,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CaptureException => "capture_exception",
            EventKind::CaptureMessage => "capture_message",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error as reported to the collector: a message and an optional stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    pub message: String,
    pub stack: Option<String>,
}

impl CapturedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture a Rust error. The `source()` chain, if any, becomes the stack.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let message = error.to_string();
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(format!("    caused by: {}", cause));
            source = cause.source();
        }

        let stack = if causes.is_empty() {
            None
        } else {
            Some(format!("{}\n{}", message, causes.join("\n")))
        };

        Self { message, stack }
    }
}

impl From<&(dyn std::error::Error + 'static)> for CapturedError {
    fn from(error: &(dyn std::error::Error + 'static)) -> Self {
        Self::from_error(error)
    }
}

impl From<&(dyn std::error::Error + Send + Sync + 'static)> for CapturedError {
    fn from(error: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        Self::from_error(error)
    }
}

impl From<String> for CapturedError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for CapturedError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// The `payload` object of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub metadata: Metadata,
}

/// Wire envelope: `{"event": kind, "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub event: EventKind,
    pub payload: Payload,
}

impl Envelope {
    pub fn exception(error: CapturedError, metadata: Metadata, config: &ClientConfig) -> Self {
        Self {
            event: EventKind::CaptureException,
            payload: Payload {
                message: error.message,
                stack: error.stack,
                metadata: merge_metadata(metadata, config),
            },
        }
    }

    pub fn message(message: String, metadata: Metadata, config: &ClientConfig) -> Self {
        Self {
            event: EventKind::CaptureMessage,
            payload: Payload {
                message,
                stack: None,
                metadata: merge_metadata(metadata, config),
            },
        }
    }
}

/// Apply `env`, `version` and `service` from the config over caller metadata.
///
/// Derived keys are written last, so they win on collision.
pub fn merge_metadata(mut metadata: Metadata, config: &ClientConfig) -> Metadata {
    metadata.insert("env".to_string(), Value::from(config.environment()));
    metadata.insert("version".to_string(), Value::from(config.version()));
    metadata.insert("service".to_string(), Value::from(config.service()));
    metadata
}
