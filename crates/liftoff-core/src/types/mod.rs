//! Values exchanged between the host bootstrap sequence and plugin hooks.

pub mod lifecycle;
pub mod milestone;
pub mod runtime;
pub mod user_error;

pub use lifecycle::{LifecycleState, LifecycleTracker};
pub use milestone::Milestone;
pub use runtime::{Runtime, StaticRuntime};
pub use user_error::{ErrorCode, MessageType, UserError};
