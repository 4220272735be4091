use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use voice_detect::{
    Error,
    app::{App, LifecycleHook, LogHook},
    config::ApiVariant,
};

mod common;

use common::{
    mocks::RecordingHook,
    test_utils::{create_test_config, get_request, read_json},
};

#[tokio::test]
async fn test_startup_hooks_run_in_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let hooks: Vec<Arc<dyn LifecycleHook>> = vec![
        Arc::new(RecordingHook::new("first", journal.clone())),
        Arc::new(RecordingHook::new("second", journal.clone())),
    ];
    let app = App::new(create_test_config(ApiVariant::Voice), hooks);

    app.startup().await.unwrap();
    app.shutdown().await;

    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            "startup:first".to_string(),
            "startup:second".to_string(),
            "shutdown:second".to_string(),
            "shutdown:first".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failing_startup_hook_stops_startup() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let hooks: Vec<Arc<dyn LifecycleHook>> = vec![
        Arc::new(RecordingHook::new("broken", journal.clone()).failing_startup()),
        Arc::new(RecordingHook::new("never", journal.clone())),
    ];
    let app = App::new(create_test_config(ApiVariant::Voice), hooks);

    let result = app.startup().await;

    match result {
        Err(Error::Hook { hook, message }) => {
            assert_eq!(hook, "broken");
            assert!(message.contains("startup refused"));
        }
        other => panic!("Expected hook error, got: {:?}", other),
    }
    assert_eq!(*journal.lock().unwrap(), vec!["startup:broken".to_string()]);
}

#[tokio::test]
async fn test_failing_shutdown_hook_does_not_stop_others() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let hooks: Vec<Arc<dyn LifecycleHook>> = vec![
        Arc::new(RecordingHook::new("first", journal.clone())),
        Arc::new(RecordingHook::new("second", journal.clone()).failing_shutdown()),
    ];
    let app = App::new(create_test_config(ApiVariant::Voice), hooks);

    app.shutdown().await;

    assert_eq!(
        *journal.lock().unwrap(),
        vec!["shutdown:second".to_string(), "shutdown:first".to_string()]
    );
}

#[tokio::test]
async fn test_log_hook_succeeds() {
    let hook = LogHook;
    let config = create_test_config(ApiVariant::Url);

    assert_eq!(hook.name(), "log");
    hook.on_startup(&config).await.unwrap();
    hook.on_shutdown().await.unwrap();
}

#[tokio::test]
async fn test_app_router_serves_configured_variant() {
    let hooks: Vec<Arc<dyn LifecycleHook>> = vec![Arc::new(LogHook)];
    let app = App::new(create_test_config(ApiVariant::Url), hooks);
    assert_eq!(app.config().service.variant, ApiVariant::Url);

    let response = app.router().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
}
