//! Shared helpers for API integration tests.
//!
//! Builds the application router exactly as `main.rs` does (same
//! middleware stack) and provides request/response plumbing so individual
//! tests stay declarative.

#![allow(dead_code)] // not every test binary uses every helper

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use runcell_api::config::ServerConfig;
use runcell_api::router::build_app_router;
use runcell_api::state::AppState;
use runcell_core::scripting::python::PythonExecutor;
use runcell_core::scripting::runner::ScriptRunner;

/// Build a test `ServerConfig` over the given scratch directory.
///
/// No script timeout, matching the production default.
pub fn test_config(scratch_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        scratch_dir: scratch_dir.to_string_lossy().into_owned(),
        python_bin: "python3".to_string(),
        script_timeout_secs: None,
    }
}

/// Build the full application router with all middleware layers, writing
/// transient scripts under `scratch_dir`.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, tracing, panic
/// recovery) that production uses. Tests upload `.sh` scripts, which run
/// under bash, so the Python interpreter is never actually spawned.
pub fn build_test_app(scratch_dir: &Path) -> Router {
    let config = test_config(scratch_dir);

    let runner = ScriptRunner::new(
        &config.scratch_dir,
        PythonExecutor::new(config.python_bin.clone()),
        None,
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        runner: Arc::new(runner),
    };

    build_app_router(state, &config)
}

/// Send a GET request to `uri` and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}

/// Multipart boundary used by the upload helpers.
const BOUNDARY: &str = "------------runcell-test-boundary";

/// POST a multipart upload with a single file field to `/execute-script`.
pub async fn post_upload(app: Router, field: &str, filename: &str, content: &[u8]) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/execute-script")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("build request");

    app.oneshot(request).await.expect("request should succeed")
}

/// POST a script upload as the `script_file` field.
pub async fn post_script(app: Router, filename: &str, content: &[u8]) -> Response {
    post_upload(app, "script_file", filename, content).await
}
