//! Shell script executor.
//!
//! Spawns `bash` with the script path as its argument, capturing
//! stdout/stderr.

use std::time::Duration;

use super::executor::{ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Executor for shell (bash) scripts.
pub struct ShellExecutor;

impl ScriptExecutor for ShellExecutor {
    async fn execute(
        &self,
        script_path: &str,
        timeout: Option<Duration>,
    ) -> Result<ScriptOutput, ScriptError> {
        let mut cmd = tokio::process::Command::new("bash");
        cmd.arg(script_path);
        subprocess::run_command(&mut cmd, timeout).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a temporary shell script from the given body.
    fn write_temp_script(body: &str) -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut f = tempfile::Builder::new()
            .suffix(".sh")
            .tempfile()
            .expect("create temp file");
        writeln!(f, "#!/bin/bash").expect("write shebang");
        write!(f, "{body}").expect("write body");
        f
    }

    #[tokio::test]
    async fn test_shell_captures_stdout() {
        let script = write_temp_script("echo hello from shell\n");
        let output = ShellExecutor
            .execute(script.path().to_str().expect("path"), None)
            .await
            .expect("execute");
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, "hello from shell\n");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_shell_captures_stderr() {
        let script = write_temp_script("echo oops >&2\n");
        let output = ShellExecutor
            .execute(script.path().to_str().expect("path"), None)
            .await
            .expect("execute");
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_shell_nonzero_exit() {
        let script = write_temp_script("exit 42\n");
        let output = ShellExecutor
            .execute(script.path().to_str().expect("path"), None)
            .await
            .expect("execute");
        assert_eq!(output.exit_code, 42);
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_shell_timeout() {
        let script = write_temp_script("sleep 60\n");
        let result = ShellExecutor
            .execute(
                script.path().to_str().expect("path"),
                Some(Duration::from_millis(200)),
            )
            .await;
        assert!(matches!(result, Err(ScriptError::Timeout { .. })));
    }
}
