//! Unified script execution interface and shared types.
//!
//! Defines [`ScriptExecutor`], the trait implemented by every runtime
//! executor, along with [`ScriptOutput`] and [`ScriptError`].

use std::time::Duration;

use serde::Serialize;

/// Captured output from a completed script execution.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptOutput {
    /// Complete stdout captured from the process.
    pub stdout: String,
    /// Complete stderr captured from the process.
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl ScriptOutput {
    /// Whether the script exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Errors that can occur while preparing or running a script.
///
/// A script that runs to completion with a non-zero exit code is NOT an
/// error at this layer: it yields an [`ScriptOutput`] and the caller
/// decides what a failing exit code means.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The subprocess could not be started.
    #[error("Failed to spawn script process: {0}")]
    Spawn(#[source] std::io::Error),

    /// A transient-file write/remove or stream I/O failure.
    #[error("Script I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// The script exceeded its configured timeout and was killed.
    /// Only reachable when a timeout is configured.
    #[error("Script timed out after {elapsed_ms}ms")]
    Timeout {
        /// Elapsed wall-clock time before the process was killed.
        elapsed_ms: u64,
    },
}

/// Trait implemented by all script runtime executors (Python, shell).
///
/// Each executor receives a script path, spawns the appropriate
/// interpreter subprocess, and returns the captured output or an error.
pub trait ScriptExecutor: Send + Sync {
    /// Execute the script at `script_path`, waiting at most `timeout`
    /// for completion (forever when `None`).
    fn execute(
        &self,
        script_path: &str,
        timeout: Option<Duration>,
    ) -> impl std::future::Future<Output = Result<ScriptOutput, ScriptError>> + Send;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn output_with_code(exit_code: i32) -> ScriptOutput {
        ScriptOutput {
            stdout: String::new(),
            stderr: String::new(),
            exit_code,
            duration_ms: 0,
        }
    }

    #[test]
    fn success_requires_zero_exit() {
        assert!(output_with_code(0).success());
        assert!(!output_with_code(1).success());
        assert!(!output_with_code(-1).success());
    }

    #[test]
    fn display_spawn() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "no such binary");
        let err = ScriptError::Spawn(inner);
        assert!(err.to_string().starts_with("Failed to spawn script process:"));
        assert!(err.to_string().contains("no such binary"));
    }

    #[test]
    fn display_io() {
        let inner = std::io::Error::other("disk full");
        let err = ScriptError::Io(inner);
        assert!(err.to_string().starts_with("Script I/O error:"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn display_timeout() {
        let err = ScriptError::Timeout { elapsed_ms: 5000 };
        assert_eq!(err.to_string(), "Script timed out after 5000ms");
    }

    #[test]
    fn error_source_spawn() {
        let inner = std::io::Error::other("boom");
        let err = ScriptError::Spawn(inner);
        assert!(
            std::error::Error::source(&err).is_some(),
            "Spawn variant should have a source"
        );
    }

    #[test]
    fn error_source_none_for_timeout() {
        let err = ScriptError::Timeout { elapsed_ms: 100 };
        assert!(
            std::error::Error::source(&err).is_none(),
            "Timeout variant should have no source"
        );
    }
}
