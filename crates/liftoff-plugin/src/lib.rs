//! # liftoff-plugin
//!
//! Plugin framework for Liftoff. Provides:
//!
//! - The [`Plugin`] hook contract: five lifecycle notifications, each a no-op
//!   by default, so a plugin overrides only the phases it cares about
//! - An ordered plugin registry (registration order is notification order)
//! - A milestone dispatcher with abort-on-first-error or collect-all failure
//!   handling
//! - [`PluginManager`], the single object a host owns and drives through
//!   its bootstrap sequence

pub mod error;
pub mod hooks;
pub mod manager;
pub mod prelude;
pub mod traits;

pub use error::{DispatchError, HookFailure};
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::PluginRegistry;
pub use liftoff_core::config::FailurePolicy;
pub use liftoff_core::types::Milestone;
pub use manager::PluginManager;
pub use traits::Plugin;
