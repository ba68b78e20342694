//! Plugin registry. Plugins are kept in registration order.
//!
//! The registry is append-only: no removal, no de-duplication. The same
//! plugin instance may be registered twice and is then notified twice.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::traits::Plugin;

/// Ordered collection of registered plugins.
#[derive(Default)]
pub struct PluginRegistry {
    /// Plugins in registration order.
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Appends a plugin after every previously registered one.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        info!(
            plugin = %plugin.name(),
            position = self.plugins.len(),
            "Plugin registered"
        );
        self.plugins.push(plugin);
    }

    /// Returns the plugins in registration order.
    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    /// Returns an owned copy of the current registration list.
    ///
    /// Broadcasts iterate a snapshot so the notified set is fixed for the
    /// whole call.
    pub fn snapshot(&self) -> Vec<Arc<dyn Plugin>> {
        self.plugins.clone()
    }

    /// Returns plugin names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}
