//! Prelude for convenient imports when writing plugins.

pub use liftoff_core::config::AppConfig;
pub use liftoff_core::error::AppError;
pub use liftoff_core::result::AppResult;
pub use liftoff_core::types::{ErrorCode, MessageType, Milestone, Runtime, UserError};

pub use crate::error::DispatchError;
pub use crate::manager::PluginManager;
pub use crate::traits::Plugin;
