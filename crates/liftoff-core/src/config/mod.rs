//! Configuration schemas.
//!
//! [`HostConfig`] drives the host process itself (logging, plugin dispatch)
//! and is merged from TOML files and `LIFTOFF__*` environment variables via
//! the `config` crate. [`AppConfig`] is the user application configuration
//! handed to plugin hooks; its shape is opaque to the host.

pub mod app;
pub mod logging;
pub mod plugin;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::AppConfig;
pub use self::logging::LoggingConfig;
pub use self::plugin::{FailurePolicy, PluginConfig};

use crate::error::AppError;

/// Root host configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration files (`default.toml` + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Plugin dispatch settings.
    pub plugins: PluginConfig,
    /// Path to the application configuration (JSON or TOML).
    pub app_config: Option<String>,
}

impl HostConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default` with an environment-specific overlay and
    /// environment variables prefixed with `LIFTOFF__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from_dir(Path::new("config"), env)
    }

    /// Load configuration from an explicit directory.
    ///
    /// Both files are optional; missing sections fall back to defaults.
    pub fn load_from_dir(dir: &Path, env: &str) -> Result<Self, AppError> {
        let default_path = dir.join("default");
        let env_path = dir.join(env);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_path.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_path.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("LIFTOFF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
