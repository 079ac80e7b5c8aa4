//! One-way migration of the legacy components directory.
//!
//! Moves every entry of a legacy source directory into its replacement and
//! collapses the legacy path into a symlink pointing at the replacement.
//!
//! # Sequence
//!
//! 1. Empty the destination (flat: files and empty directories).
//! 2. Rename the source to a sibling staging directory (`<src>.migrating`).
//! 3. Move each staged entry into the destination, renaming where possible
//!    and copying file contents where a rename is refused.
//! 4. Remove the staging directory and link `src -> dest`.
//!
//! There is no rollback. A failure part-way leaves the destination partially
//! populated; if the failure happened after step 2 the remaining entries stay
//! in the staging directory and the next call resumes from there. If the
//! legacy directory reappears while a staging directory is still around, the
//! call refuses to run rather than clearing entries that only exist in the
//! destination.
//!
//! Not safe to run concurrently for the same directory pair.

use std::ffi::OsString;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{FsOp, PathError};
use super::link::ensure_link;

/// Extension given to the staging directory created next to the source.
pub const STAGING_SUFFIX: &str = "migrating";

/// What a call to [`migrate_directory`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// There was no legacy directory; only the compatibility link was created.
    Linked,
    /// The legacy path was already a symlink; nothing was touched.
    AlreadyMigrated,
    /// Entries were moved out of the legacy directory.
    Moved { files: Vec<String> },
    /// Entries left behind by an interrupted migration were moved.
    Resumed { files: Vec<String> },
}

impl MigrationOutcome {
    /// Names of the entries moved into the destination, sorted.
    pub fn files(&self) -> &[String] {
        match self {
            Self::Moved { files } | Self::Resumed { files } => files,
            Self::Linked | Self::AlreadyMigrated => &[],
        }
    }
}

/// Sibling directory a legacy source is renamed to while its entries move.
pub fn staging_path(src: &Path) -> PathBuf {
    let mut name = src.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(STAGING_SUFFIX);
    src.with_file_name(name)
}

/// Migrate `src` into `dest` and leave `src` as a symlink to `dest`.
///
/// `dest` must already exist. Calling this again after a successful run is a
/// no-op because `src` is then a symlink.
pub fn migrate_directory(src: &Path, dest: &Path) -> Result<MigrationOutcome, PathError> {
    migrate_with(src, dest, rename_path)
}

type RenameFn = fn(&Path, &Path) -> io::Result<()>;

fn rename_path(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

fn migrate_with(src: &Path, dest: &Path, rename: RenameFn) -> Result<MigrationOutcome, PathError> {
    let staging = staging_path(src);
    let staging_exists = fs::symlink_metadata(&staging).is_ok();

    match fs::symlink_metadata(src) {
        Ok(meta) if meta.file_type().is_symlink() => {
            warn_if_foreign_link(src, dest);
            if staging_exists {
                warn!(
                    staging = %staging.display(),
                    "Stale staging directory left next to a migrated path"
                );
            }
            debug!(src = %src.display(), "Legacy directory already migrated");
            return Ok(MigrationOutcome::AlreadyMigrated);
        }
        Ok(_) if staging_exists => {
            return Err(PathError::StagingConflict {
                src: src.to_path_buf(),
                staging,
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if staging.is_dir() {
                info!(
                    staging = %staging.display(),
                    dest = %dest.display(),
                    "Resuming interrupted migration"
                );
                let files = move_entries(&staging, dest, rename)?;
                remove_source(&staging)?;
                ensure_link(dest, src)?;
                return Ok(MigrationOutcome::Resumed { files });
            }
            ensure_link(dest, src)?;
            return Ok(MigrationOutcome::Linked);
        }
        Err(e) => return Err(PathError::io(FsOp::Stat, src, e)),
    }

    clear_directory(dest)?;

    let source = stage(src, &staging, rename);
    let files = move_entries(&source, dest, rename)?;
    remove_source(&source)?;
    ensure_link(dest, src)?;

    Ok(MigrationOutcome::Moved { files })
}

/// Delete every entry of `dir` without recursing.
///
/// Files are removed, as are empty directories; a non-empty directory fails.
fn clear_directory(dir: &Path) -> Result<(), PathError> {
    for entry in read_entries(dir)? {
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            fs::remove_dir(&path).map_err(|e| PathError::io(FsOp::RemoveDir, &path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| PathError::io(FsOp::RemoveFile, &path, e))?;
        }
        debug!(entry = %path.display(), "Removed stale entry");
    }
    Ok(())
}

/// Rename `src` out of the way; on failure keep reading it in place.
fn stage(src: &Path, staging: &Path, rename: RenameFn) -> PathBuf {
    match rename(src, staging) {
        Ok(()) => staging.to_path_buf(),
        Err(e) => {
            warn!(
                src = %src.display(),
                staging = %staging.display(),
                error = %e,
                "Could not stage legacy directory, migrating in place"
            );
            src.to_path_buf()
        }
    }
}

fn move_entries(from: &Path, dest: &Path, rename: RenameFn) -> Result<Vec<String>, PathError> {
    let entries = read_entries(from)?;
    if !entries.is_empty() {
        info!(
            count = entries.len(),
            "Moving files from {:?} to {:?}",
            from.display().to_string(),
            dest.display().to_string()
        );
    }

    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.file_name();
        move_entry(&entry.path(), &dest.join(&name), rename)?;
        let name = name.to_string_lossy().into_owned();
        debug!(file = %name, "Moved entry");
        files.push(name);
    }

    files.sort();
    Ok(files)
}

fn move_entry(from: &Path, to: &Path, rename: RenameFn) -> Result<(), PathError> {
    let rename_err = match rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    let meta = fs::symlink_metadata(from).map_err(|e| PathError::io(FsOp::Stat, from, e))?;
    if !meta.is_file() {
        return Err(PathError::io(FsOp::Rename, from, rename_err));
    }

    debug!(file = %from.display(), error = %rename_err, "Rename refused, copying contents");
    let content = fs::read(from).map_err(|e| PathError::io(FsOp::ReadFile, from, e))?;
    fs::write(to, content).map_err(|e| PathError::io(FsOp::WriteFile, to, e))
}

fn remove_source(dir: &Path) -> Result<(), PathError> {
    fs::remove_dir_all(dir).map_err(|e| PathError::io(FsOp::RemoveDir, dir, e))
}

fn read_entries(dir: &Path) -> Result<Vec<DirEntry>, PathError> {
    fs::read_dir(dir)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|e| PathError::io(FsOp::ReadDir, dir, e))
}

fn warn_if_foreign_link(src: &Path, dest: &Path) {
    let resolved = fs::canonicalize(src).ok();
    if resolved.is_none() || resolved != fs::canonicalize(dest).ok() {
        warn!(
            src = %src.display(),
            dest = %dest.display(),
            "Legacy path is a symlink that does not resolve to the resources directory"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn refuse_rename(_from: &Path, _to: &Path) -> io::Result<()> {
        Err(io::Error::other("cross-device link"))
    }

    #[test]
    fn staging_path_is_a_sibling() {
        let staging = staging_path(Path::new("/home/dev/.dapr/components"));
        assert_eq!(staging, PathBuf::from("/home/dev/.dapr/components.migrating"));
    }

    #[test]
    fn clear_directory_removes_files_and_empty_directories() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("old.yaml"), b"stale").unwrap();
        fs::write(temp.path().join("older.yaml"), b"stale").unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        clear_directory(temp.path()).unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_directory_names_entry_it_cannot_remove() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("keep.yaml"), b"keep").unwrap();

        let err = clear_directory(temp.path()).unwrap_err();

        assert!(matches!(err, PathError::Io { op: FsOp::RemoveDir, .. }));
        assert_eq!(err.failed_path(), Some(nested.as_path()));
        assert!(nested.join("keep.yaml").is_file(), "must not recurse");
    }

    #[test]
    fn missing_destination_is_a_read_dir_error() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("components");
        fs::create_dir(&src).unwrap();
        let dest = temp.path().join("resources");

        let err = migrate_directory(&src, &dest).unwrap_err();

        assert!(matches!(err, PathError::Io { op: FsOp::ReadDir, .. }));
        // Source is untouched when the destination cannot be read.
        assert!(src.is_dir());
    }

    #[test]
    fn move_entries_returns_sorted_names() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("from");
        let to = temp.path().join("to");
        fs::create_dir(&from).unwrap();
        fs::create_dir(&to).unwrap();
        for name in ["zipkin.yaml", "pubsub.yaml", "statestore.yaml"] {
            fs::write(from.join(name), name).unwrap();
        }

        let files = move_entries(&from, &to, rename_path).unwrap();

        assert_eq!(files, ["pubsub.yaml", "statestore.yaml", "zipkin.yaml"]);
        assert_eq!(fs::read_dir(&from).unwrap().count(), 0);
        assert_eq!(fs::read(to.join("zipkin.yaml")).unwrap(), b"zipkin.yaml");
    }

    #[test]
    #[cfg(unix)]
    fn refused_renames_migrate_in_place_by_copying() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("components");
        let dest = temp.path().join("resources");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();
        fs::write(src.join("a.yaml"), b"a").unwrap();
        fs::write(src.join("b.yaml"), b"b").unwrap();

        let outcome = migrate_with(&src, &dest, refuse_rename).unwrap();

        assert_eq!(outcome.files(), ["a.yaml", "b.yaml"]);
        assert_eq!(fs::read(dest.join("a.yaml")).unwrap(), b"a");
        assert_eq!(fs::read(dest.join("b.yaml")).unwrap(), b"b");
        assert!(!staging_path(&src).exists());
        assert!(fs::symlink_metadata(&src).unwrap().file_type().is_symlink());
    }

    #[test]
    fn copy_fallback_names_the_file_it_cannot_write() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("a.yaml");
        fs::write(&from, b"a").unwrap();
        let to = temp.path().join("absent").join("a.yaml");

        let err = move_entry(&from, &to, refuse_rename).unwrap_err();

        assert!(matches!(err, PathError::Io { op: FsOp::WriteFile, .. }));
        assert_eq!(err.failed_path(), Some(to.as_path()));
        assert!(from.is_file(), "source kept after a failed copy");
    }

    #[test]
    fn copy_fallback_refuses_directories() {
        let temp = tempdir().unwrap();
        let from = temp.path().join("nested");
        fs::create_dir(&from).unwrap();

        let err = move_entry(&from, &temp.path().join("moved"), refuse_rename).unwrap_err();

        assert!(matches!(err, PathError::Io { op: FsOp::Rename, .. }));
        assert_eq!(err.failed_path(), Some(from.as_path()));
    }

    #[test]
    fn outcome_files_is_empty_when_nothing_moved() {
        assert!(MigrationOutcome::Linked.files().is_empty());
        assert!(MigrationOutcome::AlreadyMigrated.files().is_empty());
    }
}
