//! Hook system: ordered plugin registry and milestone dispatcher.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::HookDispatcher;
pub use registry::PluginRegistry;
