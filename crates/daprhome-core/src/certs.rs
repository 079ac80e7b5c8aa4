//! Root certificate expiry classification.
//!
//! Operators are warned once the root certificate is within the renewal
//! window; the window defaults to 30 days.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Days before expiry at which renewal is recommended.
pub const DEFAULT_RENEWAL_THRESHOLD_DAYS: i64 = 30;

/// Errors parsing certificate expiry input.
#[derive(Debug, Error)]
pub enum CertError {
    #[error("invalid expiry timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Where a certificate stands relative to its renewal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// Outside the renewal window.
    Valid { days_left: i64 },
    /// Inside the renewal window but not yet expired.
    ExpiringSoon { days_left: i64 },
    Expired,
}

impl ExpiryStatus {
    pub const fn needs_renewal(&self) -> bool {
        !matches!(self, Self::Valid { .. })
    }

    /// Operator-facing warning, `None` when no action is needed.
    pub fn warning(&self, expires_at: DateTime<Utc>) -> Option<String> {
        let date = expires_at.format("%Y-%m-%d %H:%M:%S UTC");
        match self {
            Self::Valid { .. } => None,
            Self::ExpiringSoon { days_left } => Some(format!(
                "Dapr root certificate of your Kubernetes cluster expires in {days_left} days. \
                 Expiry date: {date}. \n Please see docs.dapr.io for certificate renewal \
                 instructions to avoid service interruptions."
            )),
            Self::Expired => Some(format!(
                "Dapr root certificate of your Kubernetes cluster has expired. \
                 Expiry date: {date}. \n Please see docs.dapr.io for certificate renewal \
                 instructions to avoid service interruptions."
            )),
        }
    }
}

/// Parse an RFC 3339 expiry timestamp.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, CertError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| CertError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        })
}

/// Classify `expires_at` as seen at `now`, renewing within `threshold`.
pub fn classify_expiry(
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
    threshold: TimeDelta,
) -> ExpiryStatus {
    if expires_at <= now {
        return ExpiryStatus::Expired;
    }
    let remaining = expires_at - now;
    let days_left = remaining.num_days();
    if remaining < threshold {
        ExpiryStatus::ExpiringSoon { days_left }
    } else {
        ExpiryStatus::Valid { days_left }
    }
}

/// [`classify_expiry`] against the current time and the default window.
pub fn check_expiry(expires_at: DateTime<Utc>) -> ExpiryStatus {
    classify_expiry(
        expires_at,
        Utc::now(),
        TimeDelta::days(DEFAULT_RENEWAL_THRESHOLD_DAYS),
    )
}
