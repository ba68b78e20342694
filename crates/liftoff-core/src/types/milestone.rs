//! Bootstrap milestones that plugins can observe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed point in the host's bootstrap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// Configuration parsed; nothing downloaded yet.
    Configure,
    /// Page ready; interpreter about to be downloaded and launched.
    BeforeLaunch,
    /// Interpreter live and environment installed; no user code run yet.
    AfterSetup,
    /// Startup scripts finished; host accepts interactive input.
    AfterStartup,
    /// User code raised an error.
    UserError,
}

impl Milestone {
    /// The four milestones that fire exactly once, in firing order.
    pub const ORDERED: [Milestone; 4] = [
        Self::Configure,
        Self::BeforeLaunch,
        Self::AfterSetup,
        Self::AfterStartup,
    ];

    /// Returns the hook name for this milestone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::BeforeLaunch => "before_launch",
            Self::AfterSetup => "after_setup",
            Self::AfterStartup => "after_startup",
            Self::UserError => "on_user_error",
        }
    }

    /// Returns whether this milestone is part of the strict ordering chain.
    ///
    /// User errors may fire any number of times and interleave with startup.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Self::UserError)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
