//! Making sure a usable installation exists before a session starts.

use daprhome_core::paths::{DirectoryCreationStrategy, InstallLayout, PathError, ensure_directory};
use daprhome_core::{
    InstallRequest, InstallationState, Installer, InstallerError, Settings, create_slim_components,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum EnsureError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Failed to install dapr: {0}")]
    Install(#[from] InstallerError),

    /// The installer reported success but the layout is still incomplete.
    #[error("Installation finished but {} is still missing", .0.display())]
    StillMissing(PathBuf),
}

/// What [`ensure_installation`] had to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureReport {
    /// An install was run.
    pub installed: bool,
    /// Slim component files written (slim mode only).
    pub slim_components: Vec<String>,
}

/// Install when the root or `bin/` is missing; in slim mode also write the
/// default components into the resources directory.
pub async fn ensure_installation(
    layout: &InstallLayout,
    settings: &Settings,
    installer: &dyn Installer,
) -> Result<EnsureReport, EnsureError> {
    let mut report = EnsureReport::default();

    if let InstallationState::Missing { path } = InstallationState::inspect(layout)? {
        info!(missing = %path.display(), "Dapr installation not found, installing");
        let request = InstallRequest::new(settings.runtime_version.clone(), settings.slim_mode);
        let output = installer.install(request).await?;
        debug!(%output, "Installer finished");
        report.installed = true;

        if let InstallationState::Missing { path } = InstallationState::inspect(layout)? {
            return Err(EnsureError::StillMissing(path));
        }
    }

    if settings.slim_mode {
        let resources = layout.resources_dir();
        ensure_directory(&resources, DirectoryCreationStrategy::AutoCreate)?;
        report.slim_components = create_slim_components(&resources)?;
    }

    Ok(report)
}
