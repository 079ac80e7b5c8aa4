//! Installer trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to install when an installation is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    /// Runtime version to pin, `None` for the installer's default.
    pub runtime_version: Option<String>,
    /// Install without container-backed defaults.
    pub slim: bool,
}

impl InstallRequest {
    #[must_use]
    pub fn new(runtime_version: Option<String>, slim: bool) -> Self {
        Self {
            runtime_version,
            slim,
        }
    }
}

/// Errors returned by an [`Installer`].
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The installer process could not be started.
    #[error("Failed to start installer: {0}")]
    StartFailed(String),

    /// The installer ran and reported failure.
    #[error("Installer exited with {status}: {output}")]
    Failed { status: String, output: String },
}

/// Performs a fresh installation.
///
/// Returns the installer's combined output so callers can log it.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, request: InstallRequest) -> Result<String, InstallerError>;
}
