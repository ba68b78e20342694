//! Errors produced while broadcasting a milestone.

use thiserror::Error;

use liftoff_core::error::{AppError, ErrorKind};
use liftoff_core::types::Milestone;

/// One plugin's hook failure.
#[derive(Debug, Error)]
#[error("plugin '{plugin}' (position {position}): {error}")]
pub struct HookFailure {
    /// Name of the failing plugin.
    pub plugin: String,
    /// Position of the plugin in the registry.
    pub position: usize,
    /// The error the hook returned.
    #[source]
    pub error: AppError,
}

/// Failure of a milestone broadcast.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A hook failed and the remaining plugins were not notified.
    #[error("{milestone} aborted by {failure}")]
    Aborted {
        /// The milestone being broadcast.
        milestone: Milestone,
        /// The failure that stopped the broadcast.
        #[source]
        failure: HookFailure,
    },
    /// Every plugin was notified and at least one hook failed.
    #[error("{milestone} failed in {} plugin(s): {}", .failures.len(), summarize(.failures))]
    Aggregate {
        /// The milestone being broadcast.
        milestone: Milestone,
        /// All failures, in registry order.
        failures: Vec<HookFailure>,
    },
}

impl DispatchError {
    /// Returns the milestone that failed.
    pub fn milestone(&self) -> Milestone {
        match self {
            Self::Aborted { milestone, .. } | Self::Aggregate { milestone, .. } => *milestone,
        }
    }

    /// Returns every recorded hook failure, in registry order.
    pub fn failures(&self) -> Vec<&HookFailure> {
        match self {
            Self::Aborted { failure, .. } => vec![failure],
            Self::Aggregate { failures, .. } => failures.iter().collect(),
        }
    }

    /// Returns the names of the failing plugins, in registry order.
    pub fn failed_plugins(&self) -> Vec<&str> {
        self.failures()
            .into_iter()
            .map(|f| f.plugin.as_str())
            .collect()
    }
}

fn summarize(failures: &[HookFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        // A single failure keeps its own kind so configuration errors stay
        // configuration errors for the host.
        let kind = match &err {
            DispatchError::Aborted { failure, .. } => failure.error.kind,
            DispatchError::Aggregate { .. } => ErrorKind::Plugin,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
