//! Transient-file script runner.
//!
//! Implements the upload-to-execution lifecycle: write the submitted bytes
//! to a uniquely named file in the scratch directory, run it under the
//! executor matching its runtime, and remove the file on every exit path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use uuid::Uuid;

use super::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use super::python::PythonExecutor;
use super::shell::ShellExecutor;

/// Script runtime selected from the uploaded filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Python,
    Shell,
}

impl ScriptKind {
    /// Classify an uploaded filename.
    ///
    /// `.sh` uploads run under the shell executor; everything else is
    /// treated as Python, the upload form's primary use case.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".sh") {
            Self::Shell
        } else {
            Self::Python
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Shell => "sh",
        }
    }
}

/// Executes submitted scripts out of a scratch directory.
///
/// Each call owns its own transient file and subprocess; there is no
/// shared mutable state, so concurrent executions cannot interfere.
pub struct ScriptRunner {
    scratch_dir: PathBuf,
    python: PythonExecutor,
    shell: ShellExecutor,
    timeout: Option<Duration>,
}

impl ScriptRunner {
    /// Create a runner writing transient files under `scratch_dir`.
    ///
    /// `timeout` of `None` lets scripts run unbounded; long-lived
    /// automation scripts are expected, so no default is imposed.
    pub fn new(
        scratch_dir: impl AsRef<Path>,
        python: PythonExecutor,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            scratch_dir: scratch_dir.as_ref().to_path_buf(),
            python,
            shell: ShellExecutor,
            timeout,
        }
    }

    /// Write `content` to a transient file, execute it, and clean up.
    ///
    /// The transient path embeds a UUID v4, so concurrent submissions of
    /// identically named scripts never collide. The returned output carries
    /// the exit code; callers decide success by [`ScriptOutput::success`].
    pub async fn execute(
        &self,
        content: &[u8],
        filename: &str,
    ) -> Result<ScriptOutput, ScriptError> {
        let kind = ScriptKind::from_filename(filename);
        let path = self.scratch_dir.join(format!(
            "script_{}.{}",
            Uuid::new_v4(),
            kind.extension()
        ));

        tokio::fs::create_dir_all(&self.scratch_dir)
            .await
            .map_err(ScriptError::Io)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(ScriptError::Io)?;

        // Removal is tied to the guard, not the happy path: dropping it on
        // error, panic, or a cancelled request still deletes the file.
        let guard = TransientScript { path };

        tracing::info!(
            script = %filename,
            kind = ?kind,
            path = %guard.path.display(),
            "Executing uploaded script"
        );

        let script_path = guard.path.to_string_lossy().into_owned();
        let result = match kind {
            ScriptKind::Python => self.python.execute(&script_path, self.timeout).await,
            ScriptKind::Shell => self.shell.execute(&script_path, self.timeout).await,
        };

        match &result {
            Ok(output) => tracing::info!(
                script = %filename,
                exit_code = output.exit_code,
                duration_ms = output.duration_ms,
                "Script finished"
            ),
            Err(err) => tracing::warn!(
                script = %filename,
                error = %err,
                "Script execution failed"
            ),
        }

        result
    }
}

/// Drop guard that deletes the transient script file.
struct TransientScript {
    path: PathBuf,
}

impl Drop for TransientScript {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "Failed to remove transient script"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
