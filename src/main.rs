//! Liftoff host: loads configuration, registers the built-in plugins and
//! walks the bootstrap milestones.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use liftoff::Bootstrap;
use liftoff_core::config::{AppConfig, HostConfig};
use liftoff_core::error::AppError;
use liftoff_core::types::StaticRuntime;
use liftoff_plugin::PluginManager;
use plugin_splashscreen::SplashscreenPlugin;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("Bootstrap failed: {}", e);
        std::process::exit(1);
    }
}

/// Load host configuration from files and environment
fn load_configuration() -> Result<HostConfig, AppError> {
    let env = std::env::var("LIFTOFF_ENV").unwrap_or_else(|_| "development".to_string());
    HostConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &HostConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Register plugins and run the bootstrap sequence
fn run(config: HostConfig) -> Result<(), AppError> {
    tracing::info!("Starting Liftoff v{}", env!("CARGO_PKG_VERSION"));

    let app_config = match &config.app_config {
        Some(path) => {
            tracing::info!("Loading application config from '{}'", path);
            AppConfig::load(Path::new(path))?
        }
        None => AppConfig::new(),
    };

    let mut plugins = PluginManager::from_config(&config.plugins);
    if config.plugins.splashscreen {
        plugins.add(Arc::new(SplashscreenPlugin::new()));
    }
    tracing::info!(plugins = ?plugins.plugin_names(), "Plugins registered");

    let runtime = StaticRuntime::new("pyodide", "0.23.0");
    let mut bootstrap = Bootstrap::new(&plugins, app_config);
    bootstrap.run(&runtime)?;

    tracing::info!(state = %bootstrap.state(), "Bootstrap complete");
    Ok(())
}
