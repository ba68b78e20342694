//! Splashscreen plugin implementation, reacting to every bootstrap milestone.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use liftoff_plugin::prelude::*;

use crate::config::SplashscreenConfig;

/// Mutable plugin state, updated from the hooks.
#[derive(Debug, Default)]
struct SplashState {
    /// Effective settings, resolved during `configure`.
    config: SplashscreenConfig,
    /// Whether the splashscreen is currently shown.
    open: bool,
    /// Status lines shown so far, oldest first.
    messages: Vec<String>,
}

/// Shows bootstrap progress until startup completes.
#[derive(Debug, Default)]
pub struct SplashscreenPlugin {
    state: Mutex<SplashState>,
}

impl SplashscreenPlugin {
    /// Create a new splashscreen plugin with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the splashscreen is currently shown.
    pub fn is_open(&self) -> bool {
        self.state().open
    }

    /// Status lines shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.state().messages.clone()
    }

    /// Effective settings.
    pub fn settings(&self) -> SplashscreenConfig {
        self.state().config.clone()
    }

    fn state(&self) -> MutexGuard<'_, SplashState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SplashState {
    fn log(&mut self, message: String) {
        if self.open {
            debug!(message = %message, "Splashscreen status");
            self.messages.push(message);
        }
    }

    fn close(&mut self) {
        if self.open {
            info!("Closing splashscreen");
            self.open = false;
        }
    }
}

impl Plugin for SplashscreenPlugin {
    fn name(&self) -> &str {
        "splashscreen"
    }

    fn configure(&self, config: &mut AppConfig) -> AppResult<()> {
        let resolved = SplashscreenConfig::resolve(config)?;
        debug!(
            enabled = resolved.enabled,
            autoclose = resolved.autoclose,
            "Splashscreen configured"
        );
        self.state().config = resolved;
        Ok(())
    }

    fn before_launch(&self, config: &mut AppConfig) -> AppResult<()> {
        let mut state = self.state();
        if !state.config.enabled {
            return Ok(());
        }

        info!("Opening splashscreen");
        state.open = true;
        match config.get_str("name") {
            Some(app) => state.log(format!("Loading {app}")),
            None => state.log("Loading application".to_string()),
        }
        state.log("Downloading interpreter...".to_string());
        Ok(())
    }

    fn after_setup(&self, runtime: &dyn Runtime) -> AppResult<()> {
        self.state().log(format!(
            "{} {} ready, running startup scripts...",
            runtime.name(),
            runtime.version()
        ));
        Ok(())
    }

    fn after_startup(&self, _runtime: &dyn Runtime) -> AppResult<()> {
        let mut state = self.state();
        state.log("Startup complete".to_string());
        if state.config.autoclose {
            state.close();
        }
        Ok(())
    }

    fn on_user_error(&self, error: &UserError) -> AppResult<()> {
        let mut state = self.state();
        if state.open {
            warn!(code = %error.code, "User error during startup, closing splashscreen");
        }
        state.close();
        Ok(())
    }
}
