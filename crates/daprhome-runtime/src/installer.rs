//! `Installer` backed by the `dapr` CLI.

use std::path::PathBuf;

use async_trait::async_trait;
use daprhome_core::{InstallRequest, Installer, InstallerError, Settings};
use tracing::info;

use crate::harness::{HarnessError, run_command};

/// Installs by running `<dapr> init`.
#[derive(Debug, Clone)]
pub struct CliInstaller {
    dapr: PathBuf,
}

impl CliInstaller {
    pub fn new(dapr: impl Into<PathBuf>) -> Self {
        Self { dapr: dapr.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.effective_dapr_cli())
    }

    /// Arguments passed to `dapr` for `request`.
    pub fn init_args(request: &InstallRequest) -> Vec<String> {
        let mut args = vec!["init".to_string()];
        if let Some(version) = &request.runtime_version {
            args.push("--runtime-version".to_string());
            args.push(version.clone());
        }
        if request.slim {
            args.push("--slim".to_string());
        }
        args
    }
}

#[async_trait]
impl Installer for CliInstaller {
    async fn install(&self, request: InstallRequest) -> Result<String, InstallerError> {
        let args = Self::init_args(&request);
        info!(dapr = %self.dapr.display(), ?args, "Installing Dapr");

        run_command(&self.dapr, &args).await.map_err(|e| match e {
            HarnessError::Failed { status, output, .. } => InstallerError::Failed {
                status: status.to_string(),
                output,
            },
            other => InstallerError::StartFailed(other.to_string()),
        })
    }
}
