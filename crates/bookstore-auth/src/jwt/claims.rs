//! Claims embedded in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TokenError;

/// Identity and timing facts carried by a token.
///
/// Both instants keep full sub-second precision, so expiry is exact rather
/// than rounded to the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaim {
    /// Random per-issuance identifier.
    pub jti: Uuid,
    /// Subject user ID.
    pub user_id: i64,
    /// Subject email.
    pub email: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl TokenClaim {
    /// Builds a claim issued at `now` that lives for `lifetime`.
    pub fn new(
        user_id: i64,
        email: &str,
        now: DateTime<Utc>,
        lifetime: std::time::Duration,
    ) -> Result<Self, TokenError> {
        if lifetime.is_zero() {
            return Err(TokenError::InvalidLifetime("lifetime is zero".to_string()));
        }

        let expires_at = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::InvalidLifetime(format!("{lifetime:?} is out of range"))
            })?;

        Ok(Self {
            jti: Uuid::new_v4(),
            user_id,
            email: email.to_string(),
            issued_at: now,
            expires_at,
        })
    }

    /// Whether the claim is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
