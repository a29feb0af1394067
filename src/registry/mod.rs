//! Shared client registry.
//!
//! # Responsibilities
//! - Map a service name to one shared `TelemetryClient`
//! - Create clients lazily on first request
//! - Keep clients for the lifetime of the registry (no eviction)
//!
//! # Design Decisions
//! - Caller-owned object, not process-global state
//! - Lookup-or-insert runs under the DashMap shard lock, so concurrent
//!   first requests for one service create exactly one client
//! - A hit ignores the supplied config entirely (no re-validation, no merge)

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::client::TelemetryClient;
use crate::config::{ConfigResult, RawConfig};
use crate::observability::metrics;
use crate::transport::{HttpTransport, Transport};

/// Registry of shared telemetry clients keyed by service name.
pub struct ClientRegistry<T: Transport + Clone = HttpTransport> {
    clients: DashMap<String, Arc<TelemetryClient<T>>>,
    /// Transport cloned into every new client.
    transport: T,
}

impl ClientRegistry<HttpTransport> {
    /// Create an empty registry whose clients post over HTTPS.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for ClientRegistry<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport + Clone> ClientRegistry<T> {
    /// Create an empty registry whose clients use `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            clients: DashMap::new(),
            transport,
        }
    }

    /// Get the client for `raw`'s service, creating it if needed.
    ///
    /// The key is `raw.service`, or "not-specified" when absent.
    pub fn get_or_create(&self, raw: &RawConfig) -> ConfigResult<Arc<TelemetryClient<T>>> {
        self.get_or_create_named(raw.service_name(), raw)
    }

    /// Get the client registered under `service_name`, creating it from
    /// `raw` if none exists. An existing entry is returned untouched.
    pub fn get_or_create_named(
        &self,
        service_name: &str,
        raw: &RawConfig,
    ) -> ConfigResult<Arc<TelemetryClient<T>>> {
        if let Some(existing) = self.clients.get(service_name) {
            return Ok(existing.value().clone());
        }

        let client = match self.clients.entry(service_name.to_string()) {
            Entry::Occupied(entry) => return Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let client =
                    Arc::new(TelemetryClient::with_transport(raw, self.transport.clone())?);
                entry.insert(client.clone());
                client
            }
        };

        metrics::record_registry_size(self.clients.len());
        tracing::info!(service = %service_name, "Registered telemetry client");
        Ok(client)
    }

    /// Look up an existing client without creating one.
    pub fn get(&self, service_name: &str) -> Option<Arc<TelemetryClient<T>>> {
        self.clients.get(service_name).map(|r| r.value().clone())
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Registered service names, in no particular order.
    pub fn services(&self) -> Vec<String> {
        self.clients.iter().map(|r| r.key().clone()).collect()
    }
}

impl<T: Transport + Clone> std::fmt::Debug for ClientRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("services", &self.services())
            .finish_non_exhaustive()
    }
}
