use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use voice_detect::{
    Result,
    app::{App, LifecycleHook},
    config::{ApiVariant, Config, LogsConfig, ServerConfig, ServiceConfig},
};

/// Create a test configuration serving the given variant
pub fn create_test_config(variant: ApiVariant) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors: true,
            max_body_bytes: 64 * 1024 * 1024,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        service: ServiceConfig { variant },
    }
}

/// Build the application router for the given variant
pub fn create_test_app(variant: ApiVariant) -> Router {
    let hooks: Vec<Arc<dyn LifecycleHook>> = Vec::new();
    App::new(create_test_config(variant), hooks).router()
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  cors: false
  max_body_bytes: 1048576
  logs:
    level: "debug"

service:
  variant: "url"
"#;

/// Configuration that only sets a few fields
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 8081
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

service:
  variant: "invalid-variant"
"#;
