//! Harness error types.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The process could not be started.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading output or waiting for exit failed.
    #[error("Lost track of {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A one-shot command exited unsuccessfully.
    #[error("{program} exited with {status}: {output}")]
    Failed {
        program: String,
        status: ExitStatus,
        output: String,
    },

    /// The session process did not exit cleanly.
    #[error("dapr didn't exit cleanly ({status})")]
    UncleanExit { status: ExitStatus, output: String },

    /// The app exited before the session was stopped.
    #[error("Stop command should have been called before the app had a chance to exit")]
    AppCrashed { output: String },

    /// The session ended without the clean-exit marker.
    #[error("Session output is missing \"{marker}\"")]
    MissingMarker { marker: &'static str, output: String },

    /// The readiness hook failed.
    #[error("Readiness hook failed: {0}")]
    Hook(String),
}

impl HarnessError {
    /// Captured process output, when the error carries any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Failed { output, .. }
            | Self::UncleanExit { output, .. }
            | Self::AppCrashed { output }
            | Self::MissingMarker { output, .. } => Some(output),
            Self::Spawn { .. } | Self::Io { .. } | Self::Hook(_) => None,
        }
    }
}
