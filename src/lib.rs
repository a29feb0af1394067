//! Orbitrace telemetry reporter.
//!
//! Captures application errors and log messages and forwards them as JSON
//! events to a collection endpoint, one HTTPS POST per event.
//!
//! ```no_run
//! use orbitrace::{Metadata, RawConfig, TelemetryClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = RawConfig::new("key", "org", "project", "https://collect.example/v1")
//!     .with_service("billing");
//! let client = TelemetryClient::new(&raw)?;
//! client.capture_message("disk full", Metadata::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod observability;
pub mod registry;
pub mod transport;

pub use client::{
    CaptureOutcome, CapturedError, DispatchError, EventKind, Metadata, TelemetryClient,
};
pub use config::{ClientConfig, ConfigError, RawConfig};
pub use registry::ClientRegistry;
pub use transport::{HttpTransport, Transport};
