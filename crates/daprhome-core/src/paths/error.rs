//! Path-related error types.
//!
//! Provides semantic errors for layout, link and migration operations.
//! Every I/O failure carries the path it happened on so an operator can
//! find the offending file after a partial migration.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem operation that failed, used to annotate [`PathError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Stat,
    ReadDir,
    RemoveFile,
    RemoveDir,
    ReadFile,
    WriteFile,
    Rename,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Stat => "reading metadata of",
            Self::ReadDir => "reading files from",
            Self::RemoveFile => "removing file",
            Self::RemoveDir => "removing directory",
            Self::ReadFile => "reading file",
            Self::WriteFile => "writing file",
            Self::Rename => "moving",
        };
        f.write_str(verb)
    }
}

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// The directory a compatibility link should point at does not exist.
    #[error("directory {} does not exist", .0.display())]
    TargetMissing(PathBuf),

    /// A filesystem call failed.
    #[error("error {op} {}: {source}", path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the compatibility symlink failed.
    #[error("error creating symlink from {} to {}: {source}", target.display(), link.display())]
    Symlink {
        target: PathBuf,
        link: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A legacy directory and the staging directory of an interrupted
    /// migration both exist; migrating either would lose entries.
    #[error(
        "{} and {} both exist; move the staged entries back or remove one of them before migrating",
        src.display(),
        staging.display()
    )]
    StagingConflict { src: PathBuf, staging: PathBuf },

    /// A path was expected to be a directory but was not.
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A directory does not exist and creation was not allowed.
    #[error("Directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {}: {reason}", path.display())]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("Directory {} is not writable: {reason}", path.display())]
    NotWritable { path: PathBuf, reason: String },
}

impl PathError {
    pub(crate) fn io(op: FsOp, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the error wraps an underlying I/O failure (including symlink creation).
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Symlink { .. })
    }

    /// The path an I/O failure happened on, if any.
    pub fn failed_path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Symlink { link, .. } => Some(link),
            Self::StagingConflict { staging, .. } => Some(staging),
            Self::TargetMissing(path)
            | Self::NotADirectory(path)
            | Self::DirectoryNotFound(path)
            | Self::CreateFailed { path, .. }
            | Self::NotWritable { path, .. } => Some(path),
        }
    }
}
