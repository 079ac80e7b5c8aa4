//! Installation state inspection and slim-mode component synthesis.
//!
//! A slim installation ships no container-backed defaults, so the state
//! store and pub/sub component definitions are synthesized in memory-backed
//! form instead.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::paths::{FsOp, InstallLayout, PathError};

/// File name of the synthesized pub/sub component.
pub const PUBSUB_COMPONENT_FILE: &str = "pubsub.yaml";
/// File name of the synthesized state store component.
pub const STATESTORE_COMPONENT_FILE: &str = "statestore.yaml";

const PUBSUB_COMPONENT: &str = "apiVersion: dapr.io/v1alpha1
kind: Component
metadata:
    name: pubsub
spec:
    type: pubsub.in-memory
    version: v1
    metadata: []";

const STATESTORE_COMPONENT: &str = "apiVersion: dapr.io/v1alpha1
kind: Component
metadata:
    name: statestore
spec:
    type: state.in-memory
    version: v1
    metadata: []";

/// Whether an installation is present on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationState {
    /// Both the installation root and its binary directory exist.
    Present,
    /// The first required directory that is absent.
    Missing { path: PathBuf },
}

impl InstallationState {
    /// Check the installation root and binary directory of `layout`.
    ///
    /// Stat failures other than "not found" are returned as errors rather
    /// than treated as a missing installation.
    pub fn inspect(layout: &InstallLayout) -> Result<Self, PathError> {
        for dir in [layout.install_root(), layout.bin_dir()] {
            match dir.metadata() {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %dir.display(), "Installation directory missing");
                    return Ok(Self::Missing { path: dir });
                }
                Err(e) => return Err(PathError::io(FsOp::Stat, &dir, e)),
            }
        }
        Ok(Self::Present)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Write `content` to `path` unless the file already exists.
///
/// Returns `true` when the file was written.
pub fn write_if_missing(path: &Path, content: &[u8]) -> Result<bool, PathError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(PathError::io(FsOp::WriteFile, path, e)),
    };
    file.write_all(content)
        .map_err(|e| PathError::io(FsOp::WriteFile, path, e))?;
    Ok(true)
}

/// Default component definitions used by slim installations, as `(file, yaml)`.
pub const fn slim_components() -> [(&'static str, &'static str); 2] {
    [
        (PUBSUB_COMPONENT_FILE, PUBSUB_COMPONENT),
        (STATESTORE_COMPONENT_FILE, STATESTORE_COMPONENT),
    ]
}

/// Write the slim default components into `dir`, keeping any existing files.
///
/// Returns the names of the files that were written.
pub fn create_slim_components(dir: &Path) -> Result<Vec<String>, PathError> {
    let mut written = Vec::new();
    for (file_name, content) in slim_components() {
        if write_if_missing(&dir.join(file_name), content.as_bytes())? {
            written.push(file_name.to_string());
        }
    }

    if !written.is_empty() {
        info!(dir = %dir.display(), files = ?written, "Created slim mode components");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::TargetOs;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_root_is_reported_first() {
        let temp = tempdir().unwrap();
        let layout = InstallLayout::new(temp.path(), TargetOs::Linux);

        let state = InstallationState::inspect(&layout).unwrap();
        assert_eq!(
            state,
            InstallationState::Missing {
                path: layout.install_root()
            }
        );
    }

    #[test]
    fn missing_bin_dir_is_reported() {
        let temp = tempdir().unwrap();
        let layout = InstallLayout::new(temp.path(), TargetOs::Linux);
        fs::create_dir_all(layout.install_root()).unwrap();

        let state = InstallationState::inspect(&layout).unwrap();
        assert_eq!(
            state,
            InstallationState::Missing {
                path: layout.bin_dir()
            }
        );
    }

    #[test]
    fn complete_installation_is_present() {
        let temp = tempdir().unwrap();
        let layout = InstallLayout::new(temp.path(), TargetOs::Linux);
        fs::create_dir_all(layout.bin_dir()).unwrap();

        assert!(InstallationState::inspect(&layout).unwrap().is_present());
    }

    #[test]
    fn write_if_missing_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("statestore.yaml");
        fs::write(&path, b"user edited").unwrap();

        assert!(!write_if_missing(&path, b"default").unwrap());
        assert_eq!(fs::read(&path).unwrap(), b"user edited");
    }

    #[test]
    fn slim_components_are_in_memory_backed() {
        let temp = tempdir().unwrap();

        let written = create_slim_components(temp.path()).unwrap();
        assert_eq!(written, [PUBSUB_COMPONENT_FILE, STATESTORE_COMPONENT_FILE]);

        let pubsub = fs::read_to_string(temp.path().join(PUBSUB_COMPONENT_FILE)).unwrap();
        assert!(pubsub.contains("type: pubsub.in-memory"));
        let state = fs::read_to_string(temp.path().join(STATESTORE_COMPONENT_FILE)).unwrap();
        assert!(state.contains("type: state.in-memory"));

        // Second run writes nothing.
        assert!(create_slim_components(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn slim_components_into_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let err = create_slim_components(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, PathError::Io { op: FsOp::WriteFile, .. }));
    }
}
