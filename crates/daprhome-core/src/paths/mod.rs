//! Installation paths and the legacy components directory migration.
//!
//! This module provides:
//! - Canonical path resolution for the installation root, binaries,
//!   resource definitions and configuration
//! - The symlink shim that keeps the legacy `components` path working
//! - The one-way `components` -> `resources` migration
//! - Read-path selection between the two directories
//!
//! # Design
//!
//! - Path computation takes an explicit [`InstallLayout`]; only
//!   [`InstallLayout::from_env`] reads ambient state
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod layout;
mod link;
mod migrate;
mod platform;
mod resolver;
mod select;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::{FsOp, PathError};

// Platform detection
pub use platform::TargetOs;

// Layout
pub use layout::{
    DEFAULT_BIN_DIR_NAME, DEFAULT_COMPONENTS_DIR_NAME, DEFAULT_CONFIG_FILE_NAME,
    DEFAULT_DAPR_DIR_NAME, DEFAULT_RESOURCES_DIR_NAME, INSTALL_ROOT_ENV, InstallLayout,
    binary_file_path,
};

// Compatibility shim
pub use link::{ensure_link, is_symlink};

// Migration
pub use migrate::{MigrationOutcome, STAGING_SUFFIX, migrate_directory, staging_path};

// Read-path selection
pub use select::{select_existing, select_read_path};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, DirectoryStatus, ensure_directory, verify_writable};

// Snapshot for diagnostics
pub use resolver::ResolvedPaths;
