//! Resolves the caller identity from an `Authorization: Bearer` header.

use std::sync::Arc;

use bookstore_core::error::AppError;
use bookstore_core::result::AppResult;

use crate::jwt::TokenCodec;

use super::identity::CallerIdentity;

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies bearer tokens presented on protected routes.
///
/// Every rejection is `Forbidden`. When the token itself failed verification
/// the [`TokenError`](crate::TokenError) is kept as the error source so it can
/// be logged; it is never part of the caller-facing message.
#[derive(Debug, Clone)]
pub struct AuthenticationGate {
    codec: Arc<TokenCodec>,
}

impl AuthenticationGate {
    /// Creates a gate verifying tokens with `codec`.
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Resolves the caller from the raw `Authorization` header value.
    pub fn authenticate(&self, authorization: Option<&str>) -> AppResult<CallerIdentity> {
        let header = authorization
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                tracing::warn!("Rejected request without Authorization header");
                AppError::forbidden("Forbidden")
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            tracing::warn!("Rejected malformed Authorization header");
            AppError::forbidden("Forbidden")
        })?;

        match self.codec.verify(token) {
            Ok(claim) => {
                tracing::debug!(user_id = claim.user_id, jti = %claim.jti, "Authenticated request");
                Ok(CallerIdentity::from(claim))
            }
            Err(err) => {
                tracing::warn!(reason = %err, "Rejected bearer token");
                Err(err.into())
            }
        }
    }
}

/// Extracts `<token>` from `Bearer <token>`; `None` for any other shape.
fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}
