//! The `splashscreen` config section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use liftoff_plugin::prelude::*;

/// Config namespace owned by the splashscreen plugin.
pub const NAMESPACE: &str = "splashscreen";

/// Keys accepted in the namespace.
const KNOWN_KEYS: [&str; 2] = ["enabled", "autoclose"];

/// Settings read from `config.splashscreen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashscreenConfig {
    /// Whether the splashscreen is shown at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether to close automatically once startup completes.
    #[serde(default = "default_true")]
    pub autoclose: bool,
}

impl Default for SplashscreenConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            autoclose: default_true(),
        }
    }
}

impl SplashscreenConfig {
    /// Validates the section and writes every default back into `config`.
    ///
    /// Unknown keys and non-boolean values are configuration errors.
    pub fn resolve(config: &mut AppConfig) -> Result<Self, AppError> {
        let unknown = config.unknown_keys(NAMESPACE, &KNOWN_KEYS);
        if !unknown.is_empty() {
            return Err(AppError::configuration(format!(
                "Unknown key(s) in '{NAMESPACE}' section: {}",
                unknown.join(", ")
            )));
        }

        let section = config.namespace_mut(NAMESPACE)?;

        let parsed: Self = serde_json::from_value(Value::Object(section.clone())).map_err(|e| {
            AppError::configuration(format!("Invalid '{NAMESPACE}' section: {e}"))
        })?;

        section
            .entry("enabled")
            .or_insert(Value::Bool(parsed.enabled));
        section
            .entry("autoclose")
            .or_insert(Value::Bool(parsed.autoclose));

        Ok(parsed)
    }
}

fn default_true() -> bool {
    true
}
