//! # liftoff-core
//!
//! Core crate for Liftoff. Contains the host and application configuration
//! schemas, the opaque values handed to plugin hooks (runtime handle, user
//! errors), the bootstrap lifecycle state machine, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Liftoff crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use result::AppResult;
pub use types::{LifecycleState, LifecycleTracker, Runtime, StaticRuntime, UserError};
