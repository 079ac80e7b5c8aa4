//! Command handlers.
//!
//! Each handler is a thin wrapper: it calls into core or runtime, maps
//! errors to [`CliError`](crate::CliError), and formats terminal output.

pub mod cert;
pub mod ensure;
pub mod migrate;
pub mod paths;
pub mod resources;
pub mod uninstall;
pub mod verify;
