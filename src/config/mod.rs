//! Layered configuration for the evcharge service.
//!
//! # Priority (lowest to highest)
//! 1. `default.toml`
//! 2. `{environment}.toml`, selected by `EVCHARGE_APP_ENV`
//! 3. `local.toml` (not committed)
//! 4. `EVCHARGE_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, LoggerSettings, ServerConfig, Settings};
