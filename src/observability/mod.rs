//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client / registry produce:
//!     → tracing events (disabled notice, dispatch failures, registrations)
//!     → metrics.rs (counters, histogram, gauge via the `metrics` facade)
//!
//! Consumers (installed by the host, never by the library):
//!     → logging.rs init_logging for binaries and quick setups
//!     → any metrics recorder/exporter the host chooses
//! ```

pub mod logging;
pub mod metrics;
