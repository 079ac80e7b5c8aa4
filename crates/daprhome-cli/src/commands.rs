//! Available subcommands.

use clap::Subcommand;
use daprhome_core::DEFAULT_RENEWAL_THRESHOLD_DAYS;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resolved paths of the installation
    Paths {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the directory resource definitions are read from
    ResourcesDir,

    /// Move the legacy components directory into resources and link it back
    Migrate,

    /// Install Dapr if it is missing (and write slim components in slim mode)
    Ensure,

    /// Run `dapr` with the given arguments and check it exits cleanly
    ///
    /// Example: daprhome verify --stop-app-id myapp -- run --app-id myapp -- sleep 60
    Verify {
        /// Run `dapr stop --app-id <APP_ID>` once the session is ready
        #[arg(long, value_name = "APP_ID")]
        stop_app_id: Option<String>,

        /// Arguments passed to `dapr`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run `dapr uninstall`, forwarding the configured container runtime
    Uninstall {
        /// Extra arguments for `dapr uninstall`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check whether a root certificate needs renewal
    CertCheck {
        /// Certificate expiry as an RFC 3339 timestamp
        #[arg(long, value_name = "RFC3339")]
        expires_at: String,

        /// Warn this many days before expiry
        #[arg(long, default_value_t = DEFAULT_RENEWAL_THRESHOLD_DAYS)]
        threshold_days: i64,
    },
}
