//! One-shot `dapr` invocations and argument helpers.

use std::ffi::OsStr;
use std::process::Stdio;

use daprhome_core::{Settings, TargetOs};
use tokio::process::Command;
use tracing::debug;

use super::error::HarnessError;

const CONTAINER_RUNTIME_FLAG: &str = "--container-runtime";

/// Run `program` to completion and return stdout followed by stderr.
///
/// A non-zero exit is [`HarnessError::Failed`] carrying the same output.
pub async fn run_command<P, S>(program: P, args: &[S]) -> Result<String, HarnessError>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let name = program.as_ref().to_string_lossy().into_owned();
    let output = Command::new(program.as_ref())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| HarnessError::Spawn {
            program: name.clone(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    debug!(program = %name, status = %output.status, "Command finished");

    if output.status.success() {
        Ok(combined)
    } else {
        Err(HarnessError::Failed {
            program: name,
            status: output.status,
            output: combined,
        })
    }
}

/// Arguments for `dapr uninstall`, forwarding the configured container runtime.
///
/// The runtime is only added outside slim mode, when it is set, and when the
/// caller did not pass the flag already.
pub fn uninstall_args(args: &[String], settings: &Settings) -> Vec<String> {
    let mut full = Vec::with_capacity(args.len() + 3);
    full.push("uninstall".to_string());
    full.extend(args.iter().cloned());

    let already_set = args
        .iter()
        .any(|a| a == CONTAINER_RUNTIME_FLAG || a.starts_with("--container-runtime="));

    if let Some(runtime) = settings.container_runtime.as_deref() {
        if !settings.slim_mode && !runtime.is_empty() && !already_set {
            full.push(CONTAINER_RUNTIME_FLAG.to_string());
            full.push(runtime.to_string());
        }
    }
    full
}

/// Arguments for `dapr stop --app-id <app_id>`.
pub fn stop_args(app_id: &str) -> Vec<String> {
    vec!["stop".to_string(), "--app-id".to_string(), app_id.to_string()]
}

/// Unix domain socket directories to exercise. Windows only supports TCP.
pub const fn socket_cases(os: &TargetOs) -> &'static [&'static str] {
    if os.is_windows() { &[""] } else { &["", "/tmp"] }
}
