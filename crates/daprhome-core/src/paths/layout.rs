//! Installation layout resolution.
//!
//! Computes the canonical locations under the installation root from an
//! explicit home directory and OS, so nothing below reads ambient state.

use std::env;
use std::path::{Path, PathBuf};

use super::platform::{TargetOs, home_dir_or_empty};

/// Name of the installation root directory under the user's home.
pub const DEFAULT_DAPR_DIR_NAME: &str = ".dapr";
/// Binary directory under the installation root.
pub const DEFAULT_BIN_DIR_NAME: &str = "bin";
/// Legacy component definitions directory.
pub const DEFAULT_COMPONENTS_DIR_NAME: &str = "components";
/// Current resource definitions directory.
pub const DEFAULT_RESOURCES_DIR_NAME: &str = "resources";
/// Default configuration file under the installation root.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.yaml";
/// Environment variable that replaces `~/.dapr` as the installation root.
pub const INSTALL_ROOT_ENV: &str = "DAPR_INSTALL_ROOT";

/// Inputs for every path computation, captured once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    home: PathBuf,
    os: TargetOs,
    root_override: Option<PathBuf>,
}

impl InstallLayout {
    /// Layout rooted at `<home>/.dapr` for the given OS.
    pub fn new(home: impl Into<PathBuf>, os: TargetOs) -> Self {
        Self {
            home: home.into(),
            os,
            root_override: None,
        }
    }

    /// Use `root` as the installation root instead of `<home>/.dapr`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_override = Some(root.into());
        self
    }

    /// Build the layout from the current environment.
    ///
    /// Resolution order for the root:
    /// 1. `DAPR_INSTALL_ROOT` environment variable (if non-empty)
    /// 2. `<home>/.dapr`, where an unknown home degrades to an empty base
    pub fn from_env() -> Self {
        let layout = Self::new(home_dir_or_empty(), TargetOs::current());
        match env::var_os(INSTALL_ROOT_ENV) {
            Some(root) if !root.is_empty() => layout.with_root(root),
            _ => layout,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub const fn os(&self) -> &TargetOs {
        &self.os
    }

    /// Root of every managed path.
    pub fn install_root(&self) -> PathBuf {
        self.root_override
            .clone()
            .unwrap_or_else(|| self.home.join(DEFAULT_DAPR_DIR_NAME))
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install_root().join(DEFAULT_BIN_DIR_NAME)
    }

    /// Path of an installed executable, e.g. `daprd` or `placement`.
    pub fn binary_path(&self, binary_prefix: &str) -> PathBuf {
        binary_file_path(&self.bin_dir(), binary_prefix, &self.os)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.install_root().join(DEFAULT_COMPONENTS_DIR_NAME)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.install_root().join(DEFAULT_RESOURCES_DIR_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.install_root().join(DEFAULT_CONFIG_FILE_NAME)
    }
}

/// Join `binary_prefix` onto `binary_dir`, adding `.exe` on Windows only.
pub fn binary_file_path(binary_dir: &Path, binary_prefix: &str, os: &TargetOs) -> PathBuf {
    binary_dir.join(format!("{binary_prefix}{}", os.executable_suffix()))
}
