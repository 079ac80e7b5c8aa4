//! Read-path selection between the resources and legacy components directories.

use std::fs;
use std::path::{Path, PathBuf};

use super::layout::InstallLayout;

/// Directory callers should read resource definitions from.
///
/// Returns the resources directory when it exists and the legacy components
/// directory otherwise. After a migration the legacy path is a link back to
/// the resources directory, so both answers converge. Never mutates the disk.
pub fn select_read_path(layout: &InstallLayout) -> PathBuf {
    select_existing(&layout.resources_dir(), &layout.components_dir())
}

/// Layout-free form of [`select_read_path`].
///
/// Any failure to stat `resources` (not only "not found") selects `components`.
pub fn select_existing(resources: &Path, components: &Path) -> PathBuf {
    if fs::metadata(resources).is_ok() {
        resources.to_path_buf()
    } else {
        components.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::TargetOs;
    use tempfile::tempdir;

    #[test]
    fn prefers_resources_when_present() {
        let temp = tempdir().unwrap();
        let layout = InstallLayout::new(temp.path(), TargetOs::current());
        fs::create_dir_all(layout.resources_dir()).unwrap();
        fs::create_dir_all(layout.components_dir()).unwrap();

        assert_eq!(select_read_path(&layout), layout.resources_dir());
    }

    #[test]
    fn falls_back_to_components() {
        let temp = tempdir().unwrap();
        let layout = InstallLayout::new(temp.path(), TargetOs::current());

        assert_eq!(select_read_path(&layout), layout.components_dir());
        // Selection never creates anything.
        assert!(!layout.install_root().exists());
    }
}
