//! Python script executor.
//!
//! Runs `{interpreter} {script}` with a configurable interpreter binary,
//! so deployments can point at a specific Python (a venv's `bin/python`,
//! `python3.12`, ...) without code changes.

use std::time::Duration;

use super::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Executor for Python scripts.
pub struct PythonExecutor {
    interpreter: String,
}

impl PythonExecutor {
    /// Create an executor that invokes the given interpreter binary.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl ScriptExecutor for PythonExecutor {
    async fn execute(
        &self,
        script_path: &str,
        timeout: Option<Duration>,
    ) -> Result<ScriptOutput, ScriptError> {
        let mut cmd = tokio::process::Command::new(&self.interpreter);
        cmd.arg(script_path);
        subprocess::run_command(&mut cmd, timeout).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
