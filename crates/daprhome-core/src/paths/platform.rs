//! Platform detection for path resolution.
//!
//! Holds the OS identifier that drives the executable-suffix convention and
//! the home-directory lookup used to anchor the installation root.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::warn;

/// Operating system an installation layout is computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOs {
    Windows,
    Linux,
    MacOs,
    /// Any other identifier, kept verbatim.
    Other(String),
}

impl TargetOs {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        Self::from_identifier(env::consts::OS)
    }

    /// Parse an OS identifier as reported by `std::env::consts::OS` (or `GOOS`).
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Suffix appended to executable names on this platform.
    pub const fn executable_suffix(&self) -> &'static str {
        if self.is_windows() { ".exe" } else { "" }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Linux => f.write_str("linux"),
            Self::MacOs => f.write_str("macos"),
            Self::Other(id) => f.write_str(id),
        }
    }
}

/// Look up the user's home directory.
///
/// A failed lookup is not escalated: the installation root then becomes
/// relative to the working directory. The degradation is logged so a
/// misconfigured environment is visible.
pub(super) fn home_dir_or_empty() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("Cannot determine home directory; installation paths will be relative");
        PathBuf::new()
    })
}
