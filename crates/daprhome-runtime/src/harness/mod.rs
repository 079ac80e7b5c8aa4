//! Driving a running `dapr` process from the outside.
//!
//! A session is started with [`run_session`], which streams stdout until the
//! process exits and fires a hook once the readiness marker shows up. The
//! resulting [`SessionTranscript`] is then checked with
//! [`SessionTranscript::verify`].

mod command;
mod error;
mod session;
mod stream;

/// Printed by `dapr run` once both the sidecar and the app are up.
pub const READY_MARKER: &str = "You're up and running!";
/// Printed by `dapr run` after a clean shutdown.
pub const CLEAN_EXIT_MARKER: &str = "Exited Dapr successfully";
/// Printed when the app died on its own instead of being stopped.
pub const APP_CRASH_MARKER: &str = "The App process exited with error code: exit status";

pub use command::{run_command, socket_cases, stop_args, uninstall_args};
pub use error::HarnessError;
pub use session::{SessionTranscript, run_session};
pub use stream::{LineReader, spawn_log_reader};
