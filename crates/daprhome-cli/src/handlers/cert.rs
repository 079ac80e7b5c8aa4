//! Cert-check command handler.

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use daprhome_core::{ExpiryStatus, classify_expiry, parse_expiry};

use crate::CliError;

/// Status line printed for `status`.
pub fn report(status: ExpiryStatus, expires_at: DateTime<Utc>) -> String {
    match status {
        ExpiryStatus::Valid { days_left } => {
            format!("Root certificate is valid for {days_left} more days.")
        }
        _ => status.warning(expires_at).unwrap_or_default(),
    }
}

/// Renewal window from `--threshold-days`.
pub fn threshold(days: i64) -> Result<TimeDelta, CliError> {
    if days < 0 {
        return Err(CliError::Arguments(format!(
            "--threshold-days must not be negative, got {days}"
        )));
    }
    TimeDelta::try_days(days)
        .ok_or_else(|| CliError::Arguments(format!("--threshold-days {days} is out of range")))
}

pub fn execute(expires_at: &str, threshold_days: i64) -> Result<()> {
    let window = threshold(threshold_days)?;
    let expires_at = parse_expiry(expires_at).map_err(CliError::from)?;
    let status = classify_expiry(expires_at, Utc::now(), window);
    println!("{}", report(status, expires_at));
    Ok(())
}
