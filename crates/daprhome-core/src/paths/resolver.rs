//! Resolved path snapshot for diagnostics and CLI introspection.
//!
//! Captures every managed path of an [`InstallLayout`] in one struct, which
//! backs the `daprhome paths` command.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::layout::InstallLayout;
use super::select::select_read_path;

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// Operating system the layout was computed for
    pub os: String,
    /// Root of the installation (`~/.dapr`)
    pub install_root: PathBuf,
    /// Directory holding the installed executables
    pub bin_dir: PathBuf,
    /// Legacy component definitions directory
    pub components_dir: PathBuf,
    /// Current resource definitions directory
    pub resources_dir: PathBuf,
    /// Default runtime configuration file
    pub config_file: PathBuf,
    /// Directory resource definitions are currently read from
    pub read_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve every path of `layout`.
    ///
    /// `read_path` depends on what exists on disk; everything else is pure.
    pub fn resolve(layout: &InstallLayout) -> Self {
        Self {
            os: layout.os().to_string(),
            install_root: layout.install_root(),
            bin_dir: layout.bin_dir(),
            components_dir: layout.components_dir(),
            resources_dir: layout.resources_dir(),
            config_file: layout.config_file(),
            read_path: select_read_path(layout),
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "os = {}", self.os)?;
        writeln!(f, "install_root = {}", self.install_root.display())?;
        writeln!(f, "bin_dir = {}", self.bin_dir.display())?;
        writeln!(f, "components_dir = {}", self.components_dir.display())?;
        writeln!(f, "resources_dir = {}", self.resources_dir.display())?;
        writeln!(f, "config_file = {}", self.config_file.display())?;
        write!(f, "read_path = {}", self.read_path.display())
    }
}
