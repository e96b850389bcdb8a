//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted access token lifetime, in minutes (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;

/// Longest accepted refresh token lifetime, in hours (one year).
pub const MAX_REFRESH_TTL_HOURS: u64 = 365 * 24;

/// Token signing and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Must be at least 32 bytes.
    pub token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: u64,
}

impl AuthConfig {
    /// Checks that both token lifetimes are non-zero and within bounds.
    pub fn validate(&self) -> Result<(), AppError> {
        lifetime(
            "auth.access_token_ttl_minutes",
            self.access_token_ttl_minutes,
            60,
            MAX_ACCESS_TTL_MINUTES,
        )?;
        lifetime(
            "auth.refresh_token_ttl_hours",
            self.refresh_token_ttl_hours,
            3600,
            MAX_REFRESH_TTL_HOURS,
        )?;
        Ok(())
    }

    /// Access token lifetime. Saturates on values [`validate`](Self::validate) rejects.
    pub fn access_token_duration(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_minutes.saturating_mul(60))
    }

    /// Refresh token lifetime. Saturates on values [`validate`](Self::validate) rejects.
    pub fn refresh_token_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_token_ttl_hours.saturating_mul(3600))
    }
}

fn lifetime(key: &str, value: u64, unit_secs: u64, max: u64) -> Result<Duration, AppError> {
    if value == 0 || value > max {
        return Err(AppError::configuration(format!(
            "{key} must be between 1 and {max}, got {value}"
        )));
    }
    value
        .checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| AppError::configuration(format!("{key} overflows")))
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    168
}

fn default_password_min() -> u64 {
    8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn config(access: u64, refresh: u64) -> AuthConfig {
        AuthConfig {
            token_secret: "s".to_string(),
            access_token_ttl_minutes: access,
            refresh_token_ttl_hours: refresh,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_durations_from_defaults() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"token_secret":"s"}"#).expect("valid auth config");
        assert!(config.validate().is_ok());
        assert_eq!(config.access_token_duration().as_secs(), 15 * 60);
        assert_eq!(config.refresh_token_duration().as_secs(), 7 * 24 * 3600);
        assert_eq!(config.password_min_length, 8);
    }

    #[test]
    fn test_zero_lifetimes_rejected() {
        let err = config(0, 168).validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("access_token_ttl_minutes"));

        let err = config(15, 0).validate().unwrap_err();
        assert!(err.message.contains("refresh_token_ttl_hours"));
    }

    #[test]
    fn test_oversized_lifetimes_rejected_without_overflow() {
        assert!(config(u64::MAX, 168).validate().is_err());
        assert!(config(15, u64::MAX).validate().is_err());
        assert!(config(MAX_ACCESS_TTL_MINUTES, MAX_REFRESH_TTL_HOURS).validate().is_ok());
        assert_eq!(
            config(u64::MAX, 1).access_token_duration(),
            Duration::from_secs(u64::MAX)
        );
    }
}
