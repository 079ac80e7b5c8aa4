//! Preparing directories before a migration or install writes into them.
//!
//! A migration requires the resources directory to exist already; the
//! installer side calls [`ensure_directory`] for that. Prompting is left to
//! the CLI, which then picks a [`DirectoryCreationStrategy`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process;

use tracing::debug;

use super::error::PathError;

/// What to do when the directory is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    #[default]
    AutoCreate,
    /// Missing directories are an error.
    Disallow,
}

/// Result of a successful [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Existing,
    Created,
}

/// Make sure `path` is a writable directory.
///
/// A symlink to a directory counts as a directory.
pub fn ensure_directory(
    path: &Path,
    strategy: DirectoryCreationStrategy,
) -> Result<DirectoryStatus, PathError> {
    let status = match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => DirectoryStatus::Existing,
        Ok(_) => return Err(PathError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match strategy {
            DirectoryCreationStrategy::Disallow => {
                return Err(PathError::DirectoryNotFound(path.to_path_buf()));
            }
            DirectoryCreationStrategy::AutoCreate => {
                fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                debug!(dir = %path.display(), "Created directory");
                DirectoryStatus::Created
            }
        },
        Err(e) => {
            return Err(PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    verify_writable(path)?;
    Ok(status)
}

/// Check that files can be created in `dir` by writing and removing a probe.
pub fn verify_writable(dir: &Path) -> Result<(), PathError> {
    let probe = dir.join(format!(".daprhome-probe-{}", process::id()));
    let not_writable = |e: io::Error| PathError::NotWritable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&probe)
        .and_then(|mut file| file.write_all(b"probe"))
        .map_err(not_writable)?;

    if let Err(e) = fs::remove_file(&probe) {
        debug!(probe = %probe.display(), error = %e, "Could not remove write probe");
    }
    Ok(())
}
