//! Port definitions for the outer adapters.
//!
//! Core stays free of process spawning; the runtime crate implements these
//! traits and tests substitute mocks.

mod installer;

pub use installer::{InstallRequest, Installer, InstallerError};
