//! Configuration schema definitions.
//!
//! `RawConfig` is what the host hands us (from code or a config file).
//! `ClientConfig` is the validated, immutable form owned by a client.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Release version used when none is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Service name used when none is configured. Also the registry fallback key.
pub const DEFAULT_SERVICE: &str = "not-specified";

/// Unvalidated client configuration.
///
/// Required fields treat `null`, `false`, `0` and `""` as missing when
/// deserialized; other scalars are kept as their textual form.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    /// API key sent in `x-orbitrace-api-key`.
    #[serde(alias = "api_key", deserialize_with = "truthy_string")]
    pub api_key: Option<String>,

    /// Organization identifier sent in `x-orbitrace-org-id`.
    #[serde(alias = "org_id", deserialize_with = "truthy_string")]
    pub org_id: Option<String>,

    /// Project identifier sent in `x-orbitrace-project-id`.
    #[serde(alias = "project_id", deserialize_with = "truthy_string")]
    pub project_id: Option<String>,

    /// Collection endpoint URL.
    #[serde(deserialize_with = "truthy_string")]
    pub endpoint: Option<String>,

    /// Deployment environment (default: "production").
    pub environment: Option<String>,

    /// Application version (default: "1.0.0").
    pub version: Option<String>,

    /// Logical service name (default: "not-specified").
    pub service: Option<String>,

    /// Disable all dispatch (default: false).
    pub disabled: Option<bool>,
}

impl RawConfig {
    /// Create a config with the four required fields set.
    pub fn new(
        api_key: impl Into<String>,
        org_id: impl Into<String>,
        project_id: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(api_key.into()),
            org_id: Some(org_id.into()),
            project_id: Some(project_id.into()),
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    /// Set the deployment environment.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the application version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the service name.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Enable or disable dispatch.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Service name this config resolves to, used as the registry key.
    pub fn service_name(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }
}

impl std::fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("endpoint", &self.endpoint)
            .field("environment", &self.environment)
            .field("version", &self.version)
            .field("service", &self.service)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Validated client configuration. Never mutated after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) org_id: String,
    pub(crate) project_id: String,
    pub(crate) endpoint: String,
    pub(crate) environment: String,
    pub(crate) version: String,
    pub(crate) service: String,
    pub(crate) disabled: bool,
}

impl ClientConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("endpoint", &self.endpoint)
            .field("environment", &self.environment)
            .field("version", &self.version)
            .field("service", &self.service)
            .field("disabled", &self.disabled)
            .finish()
    }
}

fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(truthy_text))
}

/// Textual form of a value, or `None` if it is falsy.
fn truthy_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
