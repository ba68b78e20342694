//! Plugin manager: the registry plus one broadcast per bootstrap milestone.

use std::sync::Arc;

use tracing::info;

use liftoff_core::config::{AppConfig, FailurePolicy, PluginConfig};
use liftoff_core::types::{Milestone, Runtime, UserError};

use crate::error::DispatchError;
use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::registry::PluginRegistry;
use crate::traits::Plugin;

/// Owns the registered plugins and relays bootstrap milestones to them.
///
/// The host creates one manager per process run, registers plugins during
/// setup, then calls the milestone methods at the matching points of its
/// bootstrap sequence. The manager never checks that milestones arrive in
/// order; that is the host's job (see
/// [`LifecycleTracker`](liftoff_core::types::LifecycleTracker)).
///
/// Registration needs `&mut self` while broadcasts take `&self`, so a plugin
/// cannot add plugins to the manager that is currently notifying it. Each
/// broadcast also works on a snapshot of the registry taken when it starts.
#[derive(Debug, Default)]
pub struct PluginManager {
    /// Registered plugins, in notification order.
    registry: PluginRegistry,
    /// Broadcast loop and failure policy.
    dispatcher: HookDispatcher,
}

impl PluginManager {
    /// Creates an empty manager that aborts a broadcast on the first error.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::AbortOnFirstError)
    }

    /// Creates an empty manager with an explicit failure policy.
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            registry: PluginRegistry::new(),
            dispatcher: HookDispatcher::new(policy),
        }
    }

    /// Creates an empty manager from the host's plugin settings.
    pub fn from_config(config: &PluginConfig) -> Self {
        info!(policy = %config.failure_policy, "Plugin manager created");
        Self::with_policy(config.failure_policy)
    }

    /// Registers a plugin after all previously registered ones.
    pub fn add(&mut self, plugin: Arc<dyn Plugin>) {
        self.registry.register(plugin);
    }

    /// Registers several plugins, preserving the given order.
    pub fn add_all<I>(&mut self, plugins: I)
    where
        I: IntoIterator<Item = Arc<dyn Plugin>>,
    {
        for plugin in plugins {
            self.registry.register(plugin);
        }
    }

    /// Builder-style [`add`](Self::add).
    #[must_use]
    pub fn with_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.add(plugin);
        self
    }

    /// Broadcasts `configure`.
    pub fn configure(&self, config: &mut AppConfig) -> Result<(), DispatchError> {
        self.broadcast(Milestone::Configure, |plugin| plugin.configure(config))
    }

    /// Broadcasts `before_launch`.
    pub fn before_launch(&self, config: &mut AppConfig) -> Result<(), DispatchError> {
        self.broadcast(Milestone::BeforeLaunch, |plugin| plugin.before_launch(config))
    }

    /// Broadcasts `after_setup`.
    pub fn after_setup(&self, runtime: &dyn Runtime) -> Result<(), DispatchError> {
        self.broadcast(Milestone::AfterSetup, |plugin| plugin.after_setup(runtime))
    }

    /// Broadcasts `after_startup`.
    pub fn after_startup(&self, runtime: &dyn Runtime) -> Result<(), DispatchError> {
        self.broadcast(Milestone::AfterStartup, |plugin| plugin.after_startup(runtime))
    }

    /// Broadcasts `on_user_error`.
    pub fn on_user_error(&self, error: &UserError) -> Result<(), DispatchError> {
        self.broadcast(Milestone::UserError, |plugin| plugin.on_user_error(error))
    }

    fn broadcast<F>(&self, milestone: Milestone, invoke: F) -> Result<(), DispatchError>
    where
        F: FnMut(&dyn Plugin) -> liftoff_core::AppResult<()>,
    {
        let plugins = self.registry.snapshot();
        self.dispatcher.dispatch(milestone, &plugins, invoke)
    }

    /// Returns the registered plugins in notification order.
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        self.registry.plugins()
    }

    /// Returns registered plugin names in notification order.
    pub fn plugin_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns the failure policy used by every broadcast.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.dispatcher.policy()
    }
}
