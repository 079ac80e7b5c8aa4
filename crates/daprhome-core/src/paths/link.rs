//! Symlink compatibility shim.
//!
//! Keeps a legacy directory name working by pointing it at the directory
//! that replaced it.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{FsOp, PathError};

/// Create a symlink named `link_name` that resolves to the directory `target`.
///
/// Fails with [`PathError::TargetMissing`] when `target` does not exist, in
/// which case nothing is created. An existing entry at `link_name` (including
/// an already-correct link) makes creation fail; callers guard against
/// double invocation.
pub fn ensure_link(target: &Path, link_name: &Path) -> Result<(), PathError> {
    match fs::metadata(target) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PathError::TargetMissing(target.to_path_buf()));
        }
        Err(e) => return Err(PathError::io(FsOp::Stat, target, e)),
    }

    create_dir_symlink(target, link_name).map_err(|source| PathError::Symlink {
        target: target.to_path_buf(),
        link: link_name.to_path_buf(),
        source,
    })?;

    debug!(
        target = %target.display(),
        link = %link_name.display(),
        "Created compatibility symlink"
    );
    Ok(())
}

/// True if `path` itself is a symlink. The link is not followed.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link_name: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link_name)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link_name: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link_name)
}

#[cfg(not(any(unix, windows)))]
fn create_dir_symlink(_target: &Path, _link_name: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}
