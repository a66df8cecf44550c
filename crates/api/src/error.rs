use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use runcell_core::scripting::executor::ScriptError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ScriptError`] for execution-infrastructure failures and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The script ran to completion but exited non-zero.
    #[error("Script failed with exit code {exit_code}")]
    ScriptFailed {
        /// Process exit code.
        exit_code: i32,
        /// Captured stderr output, surfaced verbatim to the caller.
        stderr: String,
    },

    /// An execution-infrastructure error from `runcell-core`
    /// (spawn failure, temp-file I/O, timeout).
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Non-zero exit surfaces the captured stderr verbatim as the
            // error detail. Not sanitized: the caller submitted the script
            // and owns its output.
            AppError::ScriptFailed { exit_code, stderr } => {
                tracing::warn!(exit_code, "Script exited non-zero");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SCRIPT_FAILED",
                    stderr.clone(),
                )
            }

            AppError::Script(err) => {
                tracing::error!(error = %err, "Script execution error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
