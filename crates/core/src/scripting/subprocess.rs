//! Shared subprocess management utilities.
//!
//! Provides [`run_command`], the common spawn + capture logic used by all
//! executors. Each executor builds a [`tokio::process::Command`] for its
//! interpreter and delegates the actual spawn, stream draining, and
//! optional timeout handling here.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::executor::{ScriptError, ScriptOutput};

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output exceeding this limit is truncated to prevent memory exhaustion
/// from extremely verbose scripts.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Spawn `cmd` as a child process, capture stdout/stderr, and wait for it
/// to terminate.
///
/// Both output streams are piped, never inherited from the parent. Stdin is
/// closed: uploaded scripts receive no input. When `timeout` is `None` the
/// child runs to completion, however long that takes; other in-flight
/// executions are unaffected because the wait is async.
pub async fn run_command(
    cmd: &mut Command,
    timeout: Option<Duration>,
) -> Result<ScriptOutput, ScriptError> {
    // `kill_on_drop(true)` ensures the child is reaped when the future is
    // dropped (timeout fired, or the caller's connection went away).
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(ScriptError::Spawn)?;

    // Take stdout/stderr handles and read them in spawned tasks so we can
    // still call `child.wait()` (which borrows `&mut child`).
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(waited) => waited.map_err(ScriptError::Io)?,
            Err(_elapsed) => {
                // Timeout expired. `child` is dropped here, which kills the
                // process because we set `kill_on_drop(true)`.
                return Err(ScriptError::Timeout {
                    elapsed_ms: start.elapsed().as_millis() as u64,
                });
            }
        },
        None => child.wait().await.map_err(ScriptError::Io)?,
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    let stdout_bytes = stdout_task.await.unwrap_or_default();
    let stderr_bytes = stderr_task.await.unwrap_or_default();

    Ok(ScriptOutput {
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        exit_code: status.code().unwrap_or(-1),
        duration_ms,
    })
}

/// Read an entire output stream into a byte buffer, capped at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
    }
    buf
}
