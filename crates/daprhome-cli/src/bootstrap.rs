//! CLI bootstrap, the composition root.
//!
//! The installation layout and settings are read from the environment here
//! and nowhere else; handlers receive them through [`CliContext`].

use std::path::PathBuf;

use daprhome_core::{InstallLayout, Settings};
use daprhome_runtime::CliInstaller;
use tracing::debug;

/// Inputs captured once at process start.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub layout: InstallLayout,
    pub settings: Settings,
}

impl CliConfig {
    /// Read layout and settings from the environment.
    ///
    /// `install_root` comes from `--install-root` and wins over the
    /// environment.
    pub fn from_env(install_root: Option<PathBuf>) -> Self {
        let layout = InstallLayout::from_env();
        let layout = match install_root {
            Some(root) => layout.with_root(root),
            None => layout,
        };
        Self {
            layout,
            settings: Settings::from_env(),
        }
    }
}

/// Everything a handler needs.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub layout: InstallLayout,
    pub settings: Settings,
    pub installer: CliInstaller,
}

impl CliContext {
    /// The `dapr` executable to spawn.
    pub fn dapr(&self) -> PathBuf {
        self.settings.effective_dapr_cli()
    }
}

/// Wire the concrete adapters together.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(
        install_root = %config.layout.install_root().display(),
        settings = ?config.settings,
        "Bootstrapped CLI context"
    );
    CliContext {
        installer: CliInstaller::from_settings(&config.settings),
        layout: config.layout,
        settings: config.settings,
    }
}
