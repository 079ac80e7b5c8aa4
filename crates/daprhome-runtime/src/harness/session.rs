//! Interactive sessions against a running `dapr` process.

use std::ffi::OsStr;
use std::future::Future;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::error::HarnessError;
use super::stream::{LineReader, spawn_log_reader};
use super::{APP_CRASH_MARKER, CLEAN_EXIT_MARKER, READY_MARKER};

/// Everything observed from a finished session.
#[derive(Debug, Clone)]
pub struct SessionTranscript {
    /// Stdout lines joined with `\n`.
    pub output: String,
    pub status: ExitStatus,
    /// Whether the readiness marker was seen.
    pub ready: bool,
}

impl SessionTranscript {
    /// Check that the session was stopped rather than dying on its own.
    ///
    /// Requires a successful exit, the clean-exit marker, and no app crash
    /// marker in the output.
    pub fn verify(&self) -> Result<(), HarnessError> {
        if !self.status.success() {
            return Err(HarnessError::UncleanExit {
                status: self.status,
                output: self.output.clone(),
            });
        }
        if self.output.contains(APP_CRASH_MARKER) {
            return Err(HarnessError::AppCrashed {
                output: self.output.clone(),
            });
        }
        if !self.output.contains(CLEAN_EXIT_MARKER) {
            return Err(HarnessError::MissingMarker {
                marker: CLEAN_EXIT_MARKER,
                output: self.output.clone(),
            });
        }
        Ok(())
    }
}

/// Run `program` to completion, calling `on_ready` once on the readiness marker.
///
/// Stdout is read line by line and kept in the transcript; stderr is only
/// logged. The hook runs while the process is still alive, so it can drive
/// it (typically by issuing `dapr stop`). If the hook fails the process is
/// killed and the hook's error is returned.
pub async fn run_session<P, F, Fut>(
    program: P,
    args: &[String],
    on_ready: F,
) -> Result<SessionTranscript, HarnessError>
where
    P: AsRef<OsStr>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), HarnessError>>,
{
    let name = program.as_ref().to_string_lossy().into_owned();
    debug!(program = %name, ?args, "Starting session");

    let mut child = Command::new(program.as_ref())
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| HarnessError::Spawn {
            program: name.clone(),
            source,
        })?;

    if let Some(stderr) = child.stderr.take() {
        spawn_log_reader(stderr, name.clone(), "stderr");
    }
    let stdout = child.stdout.take().ok_or_else(|| HarnessError::Io {
        program: name.clone(),
        source: std::io::Error::other("stdout was not captured"),
    })?;

    let mut lines = LineReader::new(stdout);
    let mut on_ready = Some(on_ready);
    let mut transcript = Vec::new();
    let mut ready = false;

    while let Some(line) = lines.next_line().await.map_err(|source| HarnessError::Io {
        program: name.clone(),
        source,
    })? {
        debug!(program = %name, "{line}");

        if !ready && line.contains(READY_MARKER) {
            ready = true;
            if let Some(hook) = on_ready.take() {
                info!(program = %name, "Session ready");
                if let Err(e) = hook().await {
                    warn!(program = %name, error = %e, "Readiness hook failed, killing session");
                    if let Err(kill_err) = child.kill().await {
                        debug!(program = %name, error = %kill_err, "Kill failed");
                    }
                    return Err(e);
                }
            }
        }
        transcript.push(line);
    }

    let status = child.wait().await.map_err(|source| HarnessError::Io {
        program: name.clone(),
        source,
    })?;
    debug!(program = %name, %status, ready, "Session finished");

    Ok(SessionTranscript {
        output: transcript.join("\n"),
        status,
        ready,
    })
}
