//! Host bootstrap driver.
//!
//! Wraps a [`PluginManager`] with a [`LifecycleTracker`] so milestones reach
//! plugins exactly once, in order. A milestone is only recorded once every
//! plugin accepted it; a failed broadcast leaves the state unchanged.

use tracing::info;

use liftoff_core::config::AppConfig;
use liftoff_core::error::AppError;
use liftoff_core::types::{LifecycleState, LifecycleTracker, Milestone, Runtime, UserError};
use liftoff_plugin::PluginManager;

/// One run of the host bootstrap sequence.
#[derive(Debug)]
pub struct Bootstrap<'a> {
    /// Plugins notified at each milestone.
    plugins: &'a PluginManager,
    /// Application configuration shared with plugins.
    config: AppConfig,
    /// Current lifecycle state.
    tracker: LifecycleTracker,
}

impl<'a> Bootstrap<'a> {
    /// Starts a new bootstrap run in the `Unconfigured` state.
    pub fn new(plugins: &'a PluginManager, config: AppConfig) -> Self {
        Self {
            plugins,
            config,
            tracker: LifecycleTracker::new(),
        }
    }

    /// Lets every plugin validate the configuration and fill in defaults.
    pub fn configure(&mut self) -> Result<(), AppError> {
        self.tracker.check(Milestone::Configure)?;
        self.plugins.configure(&mut self.config)?;
        self.record(Milestone::Configure)
    }

    /// Notifies plugins that the interpreter is about to be launched.
    pub fn launch(&mut self) -> Result<(), AppError> {
        self.tracker.check(Milestone::BeforeLaunch)?;
        self.plugins.before_launch(&mut self.config)?;
        self.record(Milestone::BeforeLaunch)
    }

    /// Notifies plugins that the interpreter is live.
    pub fn setup(&mut self, runtime: &dyn Runtime) -> Result<(), AppError> {
        self.tracker.check(Milestone::AfterSetup)?;
        self.plugins.after_setup(runtime)?;
        self.record(Milestone::AfterSetup)
    }

    /// Notifies plugins that startup scripts have finished.
    pub fn startup(&mut self, runtime: &dyn Runtime) -> Result<(), AppError> {
        self.tracker.check(Milestone::AfterStartup)?;
        self.plugins.after_startup(runtime)?;
        self.record(Milestone::AfterStartup)
    }

    /// Reports an error raised by user code.
    pub fn report_user_error(&mut self, error: &UserError) -> Result<(), AppError> {
        self.tracker.check(Milestone::UserError)?;
        self.plugins.on_user_error(error)?;
        self.record(Milestone::UserError)
    }

    /// Runs `configure`, `launch`, `setup` and `startup` back to back.
    pub fn run(&mut self, runtime: &dyn Runtime) -> Result<(), AppError> {
        self.configure()?;
        self.launch()?;
        self.setup(runtime)?;
        self.startup(runtime)
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.tracker.state()
    }

    /// Returns the application configuration as plugins left it.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn record(&mut self, milestone: Milestone) -> Result<(), AppError> {
        let state = self.tracker.advance(milestone)?;
        info!(milestone = %milestone, state = %state, "Milestone reached");
        Ok(())
    }
}
