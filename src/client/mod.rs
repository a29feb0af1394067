//! Telemetry client subsystem.
//!
//! # Data Flow
//! ```text
//! caller → capture_exception / capture_message (error|message, metadata)
//!     → event.rs (envelope + derived metadata)
//!     → telemetry.rs dispatch (serialize, one transport attempt)
//!     → CaptureOutcome::Delivered(response JSON) | DispatchError
//! ```

pub mod event;
pub mod telemetry;
pub mod types;

pub use event::{CapturedError, Envelope, EventKind, Metadata, Payload};
pub use telemetry::TelemetryClient;
pub use types::{CaptureOutcome, CaptureResult, DispatchError};
