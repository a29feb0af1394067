//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! host code / config file (TOML or JSON)
//!     → loader.rs (parse & deserialize into RawConfig)
//!     → validation.rs (required fields, defaults)
//!     → ClientConfig (validated, immutable)
//!     → owned by exactly one TelemetryClient
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated; a new config means a new client
//! - Validation reports every missing field at once

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_raw_config;
pub use schema::{ClientConfig, RawConfig};
pub use validation::validate;
