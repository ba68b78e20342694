//! Integration tests for the host bootstrap driver with real plugins.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use helpers::{CallLog, Recorder};
use liftoff::Bootstrap;
use liftoff_core::config::AppConfig;
use liftoff_core::error::ErrorKind;
use liftoff_core::types::{ErrorCode, LifecycleState, Milestone, StaticRuntime, UserError};
use liftoff_plugin::PluginManager;
use plugin_splashscreen::SplashscreenPlugin;

#[test]
fn test_full_bootstrap_with_splashscreen() {
    let log = CallLog::new();
    let splash = Arc::new(SplashscreenPlugin::new());
    let manager = PluginManager::new()
        .with_plugin(splash.clone())
        .with_plugin(Recorder::new("observer", &log));

    let config = AppConfig::from_value(json!({ "name": "demo" })).unwrap();
    let mut bootstrap = Bootstrap::new(&manager, config);
    let runtime = StaticRuntime::new("pyodide", "0.23.0");

    bootstrap.configure().unwrap();
    assert_eq!(
        bootstrap.config().get("splashscreen"),
        Some(&json!({ "enabled": true, "autoclose": true }))
    );

    bootstrap.launch().unwrap();
    assert!(splash.is_open());

    bootstrap.setup(&runtime).unwrap();
    bootstrap
        .report_user_error(&UserError::new(ErrorCode::Generic, "NameError"))
        .unwrap();
    assert!(!splash.is_open());

    bootstrap.startup(&runtime).unwrap();
    assert_eq!(bootstrap.state(), LifecycleState::Running);

    assert_eq!(
        log.names(),
        vec![
            "observer.configure",
            "observer.before_launch",
            "observer.after_setup",
            "observer.on_user_error",
            "observer.after_startup",
        ]
    );
}

#[test]
fn test_invalid_splashscreen_config_aborts_bootstrap() {
    let log = CallLog::new();
    let manager = PluginManager::new()
        .with_plugin(Arc::new(SplashscreenPlugin::new()))
        .with_plugin(Recorder::new("observer", &log));

    let config = AppConfig::from_value(json!({ "splashscreen": { "bogus": 1 } })).unwrap();
    let mut bootstrap = Bootstrap::new(&manager, config);

    let err = bootstrap
        .run(&StaticRuntime::new("pyodide", "0.23.0"))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Configuration);
    assert_eq!(bootstrap.state(), LifecycleState::Unconfigured);
    assert!(log.names().is_empty());
}

#[test]
fn test_failed_setup_leaves_state_launching() {
    let log = CallLog::new();
    let manager =
        PluginManager::new().with_plugin(Recorder::failing("A", &log, Milestone::AfterSetup));

    let mut bootstrap = Bootstrap::new(&manager, AppConfig::new());
    let err = bootstrap
        .run(&StaticRuntime::new("pyodide", "0.23.0"))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Plugin);
    assert_eq!(bootstrap.state(), LifecycleState::Launching);
    assert_eq!(
        log.names(),
        vec!["A.configure", "A.before_launch", "A.after_setup"]
    );
}
