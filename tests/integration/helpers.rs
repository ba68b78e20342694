//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use liftoff_core::config::AppConfig;
use liftoff_core::error::AppError;
use liftoff_core::result::AppResult;
use liftoff_core::types::{Milestone, Runtime, UserError};
use liftoff_plugin::Plugin;

/// One observed hook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Plugin name.
    pub plugin: String,
    /// Hook that fired.
    pub milestone: Milestone,
    /// Address of the argument, to check that every plugin got the same one.
    pub arg: usize,
}

/// Shared, ordered log of hook calls across plugins.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, plugin: &str, milestone: Milestone, arg: usize) {
        self.0.lock().unwrap().push(Call {
            plugin: plugin.to_string(),
            milestone,
            arg,
        });
    }

    /// All calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    /// `plugin.milestone` strings, in call order.
    pub fn names(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| format!("{}.{}", c.plugin, c.milestone))
            .collect()
    }
}

fn addr<T: ?Sized>(value: &T) -> usize {
    value as *const T as *const () as usize
}

/// Records every hook call; optionally fails on one milestone.
#[derive(Debug)]
pub struct Recorder {
    name: String,
    log: CallLog,
    fail_on: Option<Milestone>,
}

impl Recorder {
    /// Create a recorder that never fails.
    pub fn new(name: &str, log: &CallLog) -> Arc<dyn Plugin> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            fail_on: None,
        })
    }

    /// Create a recorder that fails when `milestone` fires.
    pub fn failing(name: &str, log: &CallLog, milestone: Milestone) -> Arc<dyn Plugin> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            fail_on: Some(milestone),
        })
    }

    fn observe(&self, milestone: Milestone, arg: usize) -> AppResult<()> {
        self.log.push(&self.name, milestone, arg);
        if self.fail_on == Some(milestone) {
            return Err(AppError::plugin(format!("{} failed on {milestone}", self.name)));
        }
        Ok(())
    }
}

impl Plugin for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, config: &mut AppConfig) -> AppResult<()> {
        self.observe(Milestone::Configure, addr(config))
    }

    fn before_launch(&self, config: &mut AppConfig) -> AppResult<()> {
        self.observe(Milestone::BeforeLaunch, addr(config))
    }

    fn after_setup(&self, runtime: &dyn Runtime) -> AppResult<()> {
        self.observe(Milestone::AfterSetup, addr(runtime))
    }

    fn after_startup(&self, runtime: &dyn Runtime) -> AppResult<()> {
        self.observe(Milestone::AfterStartup, addr(runtime))
    }

    fn on_user_error(&self, error: &UserError) -> AppResult<()> {
        self.observe(Milestone::UserError, addr(error))
    }
}

/// A plugin that overrides nothing.
#[derive(Debug)]
pub struct Inert;

impl Plugin for Inert {}
