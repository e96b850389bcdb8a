//! Access and refresh token issuance.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use bookstore_core::config::AuthConfig;

use crate::error::TokenError;

use super::claims::TokenClaim;
use super::codec::TokenCodec;

/// Tokens minted for one login.
///
/// Both tokens share the subject and nothing else; either may expire or be
/// discarded independently.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived token sent in the `Authorization` header.
    pub access_token: String,
    /// Claim embedded in the access token.
    pub access_claim: TokenClaim,
    /// Long-lived token sent only to the renewal endpoint.
    pub refresh_token: String,
    /// Claim embedded in the refresh token.
    pub refresh_claim: TokenClaim,
}

impl TokenPair {
    /// Access token expiration timestamp.
    pub fn access_expires_at(&self) -> DateTime<Utc> {
        self.access_claim.expires_at
    }

    /// Refresh token expiration timestamp.
    pub fn refresh_expires_at(&self) -> DateTime<Utc> {
        self.refresh_claim.expires_at
    }
}

/// Mints access/refresh tokens with the configured lifetimes.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Creates an issuer with explicit lifetimes.
    pub fn new(codec: Arc<TokenCodec>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Creates an issuer using the lifetimes from auth configuration.
    pub fn from_config(codec: Arc<TokenCodec>, config: &AuthConfig) -> Self {
        Self::new(
            codec,
            config.access_token_duration(),
            config.refresh_token_duration(),
        )
    }

    /// The codec tokens are signed and verified with.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issues an access + refresh pair with explicit lifetimes.
    pub fn login(
        &self,
        user_id: i64,
        email: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<TokenPair, TokenError> {
        let (access_token, access_claim) = self.codec.issue(user_id, email, access_ttl)?;
        let (refresh_token, refresh_claim) = self.codec.issue(user_id, email, refresh_ttl)?;

        tracing::debug!(
            user_id,
            access_jti = %access_claim.jti,
            refresh_jti = %refresh_claim.jti,
            "Issued token pair"
        );

        Ok(TokenPair {
            access_token,
            access_claim,
            refresh_token,
            refresh_claim,
        })
    }

    /// Issues an access + refresh pair with the configured lifetimes.
    pub fn issue_token_pair(&self, user_id: i64, email: &str) -> Result<TokenPair, TokenError> {
        self.login(user_id, email, self.access_ttl, self.refresh_ttl)
    }

    /// Issues a standalone access token with the configured lifetime.
    pub fn issue_access_token(
        &self,
        user_id: i64,
        email: &str,
    ) -> Result<(String, TokenClaim), TokenError> {
        self.codec.issue(user_id, email, self.access_ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::jwt::SigningSecret;

    fn issuer() -> (TokenIssuer, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap(),
        ));
        let secret = SigningSecret::new("issuer-test-secret-issuer-test-secret").unwrap();
        let codec = Arc::new(TokenCodec::with_clock(&secret, clock.clone()));
        (
            TokenIssuer::new(
                codec,
                Duration::from_secs(15 * 60),
                Duration::from_secs(7 * 24 * 3600),
            ),
            clock,
        )
    }

    #[test]
    fn test_pair_lifetimes_differ() {
        let (issuer, clock) = issuer();
        let pair = issuer.issue_token_pair(5, "e@x.com").unwrap();

        assert_eq!(
            pair.access_expires_at(),
            clock.now() + chrono::Duration::minutes(15)
        );
        assert_eq!(
            pair.refresh_expires_at(),
            clock.now() + chrono::Duration::days(7)
        );
        assert_ne!(pair.access_token, pair.refresh_token);
        assert_eq!(pair.access_claim.user_id, pair.refresh_claim.user_id);
    }

    #[test]
    fn test_tokens_expire_independently() {
        let (issuer, clock) = issuer();
        let pair = issuer.issue_token_pair(5, "e@x.com").unwrap();

        clock.advance(chrono::Duration::minutes(16));
        assert_eq!(
            issuer.codec().verify(&pair.access_token),
            Err(TokenError::ExpiredToken)
        );
        assert!(issuer.codec().verify(&pair.refresh_token).is_ok());
    }
}
