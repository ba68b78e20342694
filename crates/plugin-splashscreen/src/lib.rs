//! Splashscreen plugin for Liftoff.
//!
//! Shows a loading status while the interpreter is downloaded and started,
//! and closes once startup completes (or as soon as user code fails, so the
//! error is visible). Owns the `splashscreen` section of the application
//! config.

pub mod config;
pub mod plugin;

pub use config::SplashscreenConfig;
pub use plugin::SplashscreenPlugin;
