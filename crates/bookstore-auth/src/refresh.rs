//! Exchanging a refresh token for a new access token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookstore_core::error::{AppError, ErrorKind};
use bookstore_core::result::AppResult;

use crate::error::TokenError;
use crate::jwt::TokenIssuer;

/// Name of the HTTP-only cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// A newly minted access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewedAccessToken {
    /// The access token.
    pub access_token: String,
    /// When the access token expires.
    pub access_token_expires_at: DateTime<Utc>,
}

/// Renews access tokens without re-submitting credentials.
///
/// The refresh token is verified exactly like an access token and is not
/// rotated; it stays usable until its own expiry.
#[derive(Debug, Clone)]
pub struct RefreshFlow {
    issuer: Arc<TokenIssuer>,
}

impl RefreshFlow {
    /// Creates a refresh flow minting tokens with `issuer`.
    pub fn new(issuer: Arc<TokenIssuer>) -> Self {
        Self { issuer }
    }

    /// Verifies the raw refresh cookie value and mints a new access token
    /// for the same subject. Every rejection is `Unauthorized`.
    pub fn renew_access_token(&self, refresh_cookie: Option<&str>) -> AppResult<RenewedAccessToken> {
        let token = refresh_cookie
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                tracing::warn!("Token renewal without a refresh token");
                AppError::unauthorized("Can't renew the token")
            })?;

        let claim = self.issuer.codec().verify(token).map_err(|err| {
            tracing::warn!(reason = %err, "Rejected refresh token");
            unauthorized(err)
        })?;

        let (access_token, access_claim) = self
            .issuer
            .issue_access_token(claim.user_id, &claim.email)?;

        tracing::info!(user_id = claim.user_id, "Renewed access token");

        Ok(RenewedAccessToken {
            access_token,
            access_token_expires_at: access_claim.expires_at,
        })
    }
}

fn unauthorized(err: TokenError) -> AppError {
    let message = match err {
        TokenError::ExpiredToken => "Refresh token has expired",
        _ => "Invalid refresh token",
    };
    AppError::with_source(ErrorKind::Unauthorized, message, err)
}
