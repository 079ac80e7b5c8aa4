//! Core types for managing a local Dapr installation.
//!
//! - [`paths`]: installation layout, the `components` -> `resources`
//!   migration and read-path selection
//! - [`install`]: installation state and slim-mode component synthesis
//! - [`settings`]: environment-driven settings
//! - [`certs`]: root certificate expiry classification
//! - [`ports`]: traits implemented by the runtime adapters
//!
//! Nothing here spawns processes or prompts the user.

#![deny(unused_crate_dependencies)]

pub mod certs;
pub mod install;
pub mod paths;
pub mod ports;
pub mod settings;

pub use certs::{
    CertError, DEFAULT_RENEWAL_THRESHOLD_DAYS, ExpiryStatus, check_expiry, classify_expiry,
    parse_expiry,
};
pub use install::{
    InstallationState, PUBSUB_COMPONENT_FILE, STATESTORE_COMPONENT_FILE, create_slim_components,
    write_if_missing,
};
pub use ports::{InstallRequest, Installer, InstallerError};
pub use settings::Settings;

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, DirectoryStatus, InstallLayout, MigrationOutcome, PathError,
    ResolvedPaths, TargetOs, ensure_directory, ensure_link, migrate_directory, select_existing,
    select_read_path, verify_writable,
};
