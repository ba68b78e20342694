//! Plugin dispatch configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the dispatcher does after a plugin hook fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing plugin; later plugins miss the milestone.
    #[default]
    AbortOnFirstError,
    /// Notify every plugin, then report all failures together.
    CollectAll,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbortOnFirstError => write!(f, "abort_on_first_error"),
            Self::CollectAll => write!(f, "collect_all"),
        }
    }
}

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Failure policy applied to every milestone broadcast.
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Whether the built-in splashscreen plugin is registered.
    #[serde(default = "default_true")]
    pub splashscreen: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            splashscreen: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
