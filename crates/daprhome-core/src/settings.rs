//! Environment-driven settings.
//!
//! Settings are read once at process start. `from_lookup` takes an injected
//! lookup function so tests never need to touch the real environment.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Set to exactly `true` to select slim mode.
pub const SLIM_MODE_ENV: &str = "DAPR_E2E_INIT_SLIM";
/// Container runtime forwarded to uninstall (e.g. `podman`).
pub const CONTAINER_RUNTIME_ENV: &str = "CONTAINER_RUNTIME";
/// Path of the `dapr` executable driven by the harness.
pub const DAPR_CLI_PATH_ENV: &str = "DAPR_CLI_PATH";
/// Runtime version passed to `init --runtime-version`.
pub const RUNTIME_VERSION_ENV: &str = "DAPR_RUNTIME_VERSION";

/// Executable used when `DAPR_CLI_PATH` is unset.
pub const DEFAULT_DAPR_CLI: &str = "dapr";

/// Process-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Slim installations synthesize default components instead of
    /// relying on container-backed ones.
    pub slim_mode: bool,

    /// Container runtime to pass through to uninstall, if any.
    pub container_runtime: Option<String>,

    /// Explicit path to the `dapr` executable.
    pub dapr_cli_path: Option<PathBuf>,

    /// Runtime version to install when an installation is missing.
    pub runtime_version: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            slim_mode: lookup(SLIM_MODE_ENV).as_deref() == Some("true"),
            container_runtime: non_empty(CONTAINER_RUNTIME_ENV),
            dapr_cli_path: non_empty(DAPR_CLI_PATH_ENV).map(PathBuf::from),
            runtime_version: non_empty(RUNTIME_VERSION_ENV),
        }
    }

    /// The `dapr` executable to run (with default fallback).
    pub fn effective_dapr_cli(&self) -> PathBuf {
        self.dapr_cli_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DAPR_CLI))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.effective_dapr_cli(), PathBuf::from("dapr"));
    }

    #[test]
    fn slim_mode_requires_exact_true() {
        assert!(Settings::from_lookup(lookup_from(&[(SLIM_MODE_ENV, "true")])).slim_mode);
        assert!(!Settings::from_lookup(lookup_from(&[(SLIM_MODE_ENV, "TRUE")])).slim_mode);
        assert!(!Settings::from_lookup(lookup_from(&[(SLIM_MODE_ENV, "1")])).slim_mode);
    }

    #[test]
    fn blank_values_are_unset() {
        let settings = Settings::from_lookup(lookup_from(&[
            (CONTAINER_RUNTIME_ENV, ""),
            (RUNTIME_VERSION_ENV, "  "),
        ]));
        assert_eq!(settings.container_runtime, None);
        assert_eq!(settings.runtime_version, None);
    }

    #[test]
    fn reads_all_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            (CONTAINER_RUNTIME_ENV, "podman"),
            (DAPR_CLI_PATH_ENV, "/usr/local/bin/dapr"),
            (RUNTIME_VERSION_ENV, "1.12.0"),
        ]));
        assert_eq!(settings.container_runtime.as_deref(), Some("podman"));
        assert_eq!(
            settings.effective_dapr_cli(),
            PathBuf::from("/usr/local/bin/dapr")
        );
        assert_eq!(settings.runtime_version.as_deref(), Some("1.12.0"));
    }

    #[test]
    fn deserializes_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"slim_mode": true}"#).unwrap();
        assert!(settings.slim_mode);
        assert_eq!(settings.container_runtime, None);
    }
}
