//! Script upload and execution endpoints.

use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::Instrument;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for a successful script execution.
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    /// Always `"success"`; failures are reported through the error envelope.
    pub status: &'static str,
    /// Captured stdout of the script.
    pub output: String,
    /// Original filename of the uploaded script.
    pub script_name: String,
}

/// Static upload form served at the root.
const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>runcell</title>
    </head>
    <body>
        <h1>runcell Script Runner</h1>
        <form action="/execute-script" method="post" enctype="multipart/form-data">
            <input type="file" name="script_file">
            <input type="submit" value="Run script">
        </form>
    </body>
</html>
"#;

/// GET / -- static HTML form for uploading a script.
async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /execute-script -- run an uploaded script and return its output.
///
/// Expects a multipart form with a `script_file` field. The script runs to
/// completion; exit code 0 yields the captured stdout, a non-zero exit
/// yields a 500 carrying the captured stderr as the error detail.
async fn execute_script(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ExecuteResponse>> {
    let mut script: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("script_file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("script.py").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        script = Some((filename, data.to_vec()));
        break;
    }

    let Some((filename, content)) = script else {
        return Err(AppError::BadRequest(
            "Missing 'script_file' field in multipart upload".to_string(),
        ));
    };

    // Per-upload span so everything the runner logs carries the script name.
    let span = tracing::info_span!("execute_script", script = %filename);
    let output = state
        .runner
        .execute(&content, &filename)
        .instrument(span)
        .await?;

    if !output.success() {
        return Err(AppError::ScriptFailed {
            exit_code: output.exit_code,
            stderr: output.stderr,
        });
    }

    Ok(Json(ExecuteResponse {
        status: "success",
        output: output.stdout,
        script_name: filename,
    }))
}

/// Mount the upload form and execution routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(upload_form))
        .route("/execute-script", post(execute_script))
}
