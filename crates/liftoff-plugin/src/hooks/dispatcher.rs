//! Hook dispatcher: invokes one milestone hook on every plugin.
//!
//! Plugins are called sequentially, in the order given, each to completion.
//! What happens after a hook fails depends on the [`FailurePolicy`]:
//!
//! - `AbortOnFirstError`: stop immediately; later plugins are not notified.
//! - `CollectAll`: notify every plugin, then report all failures together.

use std::sync::Arc;

use tracing::{debug, error, warn};

use liftoff_core::config::FailurePolicy;
use liftoff_core::result::AppResult;
use liftoff_core::types::Milestone;

use crate::error::{DispatchError, HookFailure};
use crate::traits::Plugin;

/// Broadcasts milestones to plugins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookDispatcher {
    /// Failure policy applied to every broadcast.
    policy: FailurePolicy,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Returns the failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Calls `invoke` once per plugin, in slice order.
    ///
    /// `invoke` forwards the milestone's argument to the matching hook, so
    /// every plugin sees the same value.
    pub fn dispatch<F>(
        &self,
        milestone: Milestone,
        plugins: &[Arc<dyn Plugin>],
        mut invoke: F,
    ) -> Result<(), DispatchError>
    where
        F: FnMut(&dyn Plugin) -> AppResult<()>,
    {
        if plugins.is_empty() {
            return Ok(());
        }

        debug!(
            milestone = %milestone,
            plugin_count = plugins.len(),
            policy = %self.policy,
            "Dispatching milestone"
        );

        let mut failures = Vec::new();

        for (position, plugin) in plugins.iter().enumerate() {
            debug!(milestone = %milestone, plugin = %plugin.name(), position, "Invoking hook");

            let Err(err) = invoke(plugin.as_ref()) else {
                continue;
            };

            error!(
                milestone = %milestone,
                plugin = %plugin.name(),
                position,
                error = %err,
                "Hook failed"
            );

            let failure = HookFailure {
                plugin: plugin.name().to_string(),
                position,
                error: err,
            };

            match self.policy {
                FailurePolicy::AbortOnFirstError => {
                    let skipped = plugins.len() - position - 1;
                    if skipped > 0 {
                        warn!(milestone = %milestone, skipped, "Remaining plugins not notified");
                    }
                    return Err(DispatchError::Aborted { milestone, failure });
                }
                FailurePolicy::CollectAll => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Aggregate {
                milestone,
                failures,
            })
        }
    }
}
