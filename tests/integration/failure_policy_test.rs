//! Integration tests for hook failures under both failure policies.

mod helpers;

use helpers::{CallLog, Recorder};
use liftoff_core::config::{AppConfig, FailurePolicy};
use liftoff_core::error::{AppError, ErrorKind};
use liftoff_core::types::{ErrorCode, Milestone, StaticRuntime, UserError};
use liftoff_plugin::{DispatchError, PluginManager};

#[test]
fn test_before_launch_failure_skips_later_plugins() {
    let log = CallLog::new();
    let manager = PluginManager::new()
        .with_plugin(Recorder::failing("A", &log, Milestone::BeforeLaunch))
        .with_plugin(Recorder::new("B", &log));

    let err = manager.before_launch(&mut AppConfig::new()).unwrap_err();

    assert_eq!(log.names(), vec!["A.before_launch"]);
    assert_eq!(err.milestone(), Milestone::BeforeLaunch);
    assert_eq!(err.failed_plugins(), vec!["A"]);
    assert!(err.to_string().contains("A failed on before_launch"));
}

#[test]
fn test_failure_at_position_k_stops_the_rest() {
    let log = CallLog::new();
    let mut manager = PluginManager::new();
    manager.add_all(vec![
        Recorder::new("p1", &log),
        Recorder::new("p2", &log),
        Recorder::failing("p3", &log, Milestone::AfterSetup),
        Recorder::new("p4", &log),
        Recorder::new("p5", &log),
    ]);

    let err = manager
        .after_setup(&StaticRuntime::new("pyodide", "0.23.0"))
        .unwrap_err();

    assert_eq!(
        log.names(),
        vec!["p1.after_setup", "p2.after_setup", "p3.after_setup"]
    );
    match err {
        DispatchError::Aborted { failure, .. } => {
            assert_eq!(failure.plugin, "p3");
            assert_eq!(failure.position, 2);
        }
        other => panic!("expected Aborted, got {other:?}"),
    }
}

#[test]
fn test_failure_only_affects_its_milestone() {
    let log = CallLog::new();
    let manager = PluginManager::new()
        .with_plugin(Recorder::failing("A", &log, Milestone::Configure))
        .with_plugin(Recorder::new("B", &log));

    let mut config = AppConfig::new();
    assert!(manager.configure(&mut config).is_err());
    manager.before_launch(&mut config).unwrap();

    assert_eq!(
        log.names(),
        vec!["A.configure", "A.before_launch", "B.before_launch"]
    );
}

#[test]
fn test_user_error_handler_failure_halts_that_pass() {
    let log = CallLog::new();
    let manager = PluginManager::new()
        .with_plugin(Recorder::failing("reporter", &log, Milestone::UserError))
        .with_plugin(Recorder::new("banner", &log));

    let error = UserError::new(ErrorCode::Generic, "ZeroDivisionError");
    assert!(manager.on_user_error(&error).is_err());
    assert!(manager.on_user_error(&error).is_err());

    assert_eq!(
        log.names(),
        vec!["reporter.on_user_error", "reporter.on_user_error"]
    );
}

#[test]
fn test_collect_all_notifies_everyone_and_aggregates() {
    let log = CallLog::new();
    let mut manager = PluginManager::with_policy(FailurePolicy::CollectAll);
    manager.add_all(vec![
        Recorder::failing("A", &log, Milestone::AfterStartup),
        Recorder::new("B", &log),
        Recorder::failing("C", &log, Milestone::AfterStartup),
    ]);

    let err = manager
        .after_startup(&StaticRuntime::new("pyodide", "0.23.0"))
        .unwrap_err();

    assert_eq!(
        log.names(),
        vec!["A.after_startup", "B.after_startup", "C.after_startup"]
    );
    assert!(matches!(err, DispatchError::Aggregate { .. }));
    assert_eq!(err.failed_plugins(), vec!["A", "C"]);

    let app: AppError = err.into();
    assert_eq!(app.kind, ErrorKind::Plugin);
}
