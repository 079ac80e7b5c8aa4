//! Process-level adapters for daprhome.
//!
//! Everything that spawns the `dapr` executable lives here: one-shot
//! commands, the interactive session harness that waits for the readiness
//! marker, and the CLI-backed [`Installer`](daprhome_core::Installer).

#![deny(unsafe_code)]

mod ensure;
pub mod harness;
mod installer;

pub use ensure::{EnsureError, EnsureReport, ensure_installation};
pub use harness::{
    APP_CRASH_MARKER, CLEAN_EXIT_MARKER, HarnessError, READY_MARKER, SessionTranscript,
    run_command, run_session, socket_cases, stop_args, uninstall_args,
};
pub use installer::CliInstaller;
