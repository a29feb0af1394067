//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::RawConfig;

/// Load a raw configuration from a TOML or JSON file.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
/// The result is not validated; hand it to a client or registry for that.
pub fn load_raw_config(path: &Path) -> ConfigResult<RawConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let raw: RawConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };

    tracing::debug!(path = ?path, "Loaded telemetry configuration");
    Ok(raw)
}
