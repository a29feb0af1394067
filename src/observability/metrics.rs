//! Metrics collection.
//!
//! # Metrics
//! - `orbitrace_events_total` (counter): captures by kind and outcome
//! - `orbitrace_dispatch_duration_seconds` (histogram): time spent in one dispatch attempt
//! - `orbitrace_registry_clients` (gauge): services held by a registry
//!
//! # Design Decisions
//! - Only the `metrics` facade is used; with no recorder installed every call is a no-op
//! - Labels are static strings to keep cardinality bounded

use std::time::Instant;

use crate::client::EventKind;

pub const OUTCOME_DELIVERED: &str = "delivered";
pub const OUTCOME_FAILED: &str = "failed";
pub const OUTCOME_DISABLED: &str = "disabled";

/// Count one capture call.
pub fn record_event(kind: EventKind, outcome: &'static str) {
    ::metrics::counter!(
        "orbitrace_events_total",
        "kind" => kind.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record the duration of a dispatch attempt started at `start`.
pub fn record_dispatch_duration(kind: EventKind, start: Instant) {
    ::metrics::histogram!(
        "orbitrace_dispatch_duration_seconds",
        "kind" => kind.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Set the number of clients held by a registry.
pub fn record_registry_size(size: usize) {
    ::metrics::gauge!("orbitrace_registry_clients").set(size as f64);
}
