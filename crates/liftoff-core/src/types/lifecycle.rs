//! Host-side bootstrap state machine.
//!
//! The plugin dispatcher relays milestones without checking their order.
//! Hosts use [`LifecycleTracker`] to guarantee the ordering plugins rely on:
//! `configure`, `before_launch`, `after_setup` and `after_startup` fire once
//! each in that order, and user errors are only reported once the
//! interpreter can run user code.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::milestone::Milestone;
use crate::error::AppError;

/// Bootstrap state of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Nothing has happened yet.
    Unconfigured,
    /// Configuration validated by all plugins.
    Configured,
    /// Interpreter download/launch in progress.
    Launching,
    /// Interpreter live; startup scripts may be running.
    InterpreterReady,
    /// Startup complete; accepting interactive input.
    Running,
}

impl LifecycleState {
    /// Returns the state reached by firing `milestone` from `self`, or `None`
    /// when the milestone is not allowed here.
    pub fn transition(self, milestone: Milestone) -> Option<LifecycleState> {
        if !milestone.is_ordered() {
            return matches!(self, Self::InterpreterReady | Self::Running).then_some(self);
        }

        match (self, milestone) {
            (Self::Unconfigured, Milestone::Configure) => Some(Self::Configured),
            (Self::Configured, Milestone::BeforeLaunch) => Some(Self::Launching),
            (Self::Launching, Milestone::AfterSetup) => Some(Self::InterpreterReady),
            (Self::InterpreterReady, Milestone::AfterStartup) => Some(Self::Running),
            _ => None,
        }
    }

    /// Returns the string name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::Configured => "configured",
            Self::Launching => "launching",
            Self::InterpreterReady => "interpreter_ready",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks the current [`LifecycleState`] and rejects out-of-order milestones.
#[derive(Debug, Clone)]
pub struct LifecycleTracker {
    /// Current state.
    state: LifecycleState,
    /// Number of user errors reported so far.
    user_errors: u64,
}

impl LifecycleTracker {
    /// Creates a tracker in the `Unconfigured` state.
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Unconfigured,
            user_errors: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Returns how many user errors were reported.
    pub fn user_errors(&self) -> u64 {
        self.user_errors
    }

    /// Checks that `milestone` may fire now without changing state.
    pub fn check(&self, milestone: Milestone) -> Result<LifecycleState, AppError> {
        self.state.transition(milestone).ok_or_else(|| {
            AppError::invalid_transition(format!(
                "Milestone '{milestone}' is not allowed in state '{}'",
                self.state
            ))
        })
    }

    /// Records that `milestone` fired and returns the new state.
    pub fn advance(&mut self, milestone: Milestone) -> Result<LifecycleState, AppError> {
        let next = self.check(milestone)?;
        if milestone == Milestone::UserError {
            self.user_errors += 1;
        }
        debug!(from = %self.state, to = %next, milestone = %milestone, "Lifecycle transition");
        self.state = next;
        Ok(next)
    }
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}
