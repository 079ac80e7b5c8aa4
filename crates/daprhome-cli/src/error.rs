//! CLI-specific error types and exit code mapping.

use daprhome_core::{CertError, PathError};
use daprhome_runtime::{EnsureError, HarnessError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Filesystem error (missing directory, permission denied, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration or installation layout error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A spawned `dapr` process failed.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Exit code for this error, following sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

/// Exit code for an error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotADirectory(_) | PathError::DirectoryNotFound(_) => {
                Self::Config(err.to_string())
            }
            _ => Self::Io(err.to_string()),
        }
    }
}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        Self::Process(err.to_string())
    }
}

impl From<EnsureError> for CliError {
    fn from(err: EnsureError) -> Self {
        match err {
            EnsureError::Path(path_err) => path_err.into(),
            other => Self::Process(other.to_string()),
        }
    }
}

impl From<CertError> for CliError {
    fn from(err: CertError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_path_errors_map_to_io_or_config() {
        let missing = CliError::from(PathError::TargetMissing(PathBuf::from("/x")));
        assert_eq!(missing.exit_code(), 74);

        let not_dir = CliError::from(PathError::NotADirectory(PathBuf::from("/x")));
        assert_eq!(not_dir.exit_code(), 78);
    }

    #[test]
    fn test_cert_errors_are_usage_errors() {
        let err = daprhome_core::parse_expiry("soon").unwrap_err();
        assert_eq!(CliError::from(err).exit_code(), 2);
    }

    #[test]
    fn test_unknown_errors_exit_with_one() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
        let wrapped = anyhow::Error::new(CliError::Process("dapr died".into()));
        assert_eq!(exit_code_for(&wrapped), 71);
    }
}
