//! Configuration validation.
//!
//! # Responsibilities
//! - Check the four required fields (apiKey, orgId, projectId, endpoint)
//! - Apply defaults for optional fields
//!
//! # Design Decisions
//! - Returns all missing fields, not just the first
//! - Pure function: RawConfig → Result<ClientConfig, ConfigError>
//! - Only presence is checked; endpoint syntax is a dispatch-time concern

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::{
    ClientConfig, RawConfig, DEFAULT_ENVIRONMENT, DEFAULT_SERVICE, DEFAULT_VERSION,
};

/// Validate a raw configuration and apply defaults.
pub fn validate(raw: &RawConfig) -> ConfigResult<ClientConfig> {
    let required = [
        ("apiKey", &raw.api_key),
        ("orgId", &raw.org_id),
        ("projectId", &raw.project_id),
        ("endpoint", &raw.endpoint),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::MissingFields(missing));
    }

    let required_value = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(ClientConfig {
        api_key: required_value(&raw.api_key),
        org_id: required_value(&raw.org_id),
        project_id: required_value(&raw.project_id),
        endpoint: required_value(&raw.endpoint),
        environment: raw
            .environment
            .clone()
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        version: raw
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        service: raw
            .service
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
        disabled: raw.disabled.unwrap_or(false),
    })
}
