//! Token verification errors.

use thiserror::Error;

use bookstore_core::error::{AppError, ErrorKind};

/// Why a token could not be issued or accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed, unsigned, wrongly signed, or using an unsupported algorithm.
    #[error("token is invalid")]
    InvalidToken,
    /// Correctly signed but past its expiry.
    #[error("token has expired")]
    ExpiredToken,
    /// The requested lifetime cannot produce `expires_at > issued_at`.
    #[error("invalid token lifetime: {0}")]
    InvalidLifetime(String),
    /// The signing backend failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken | TokenError::ExpiredToken => {
                AppError::with_source(ErrorKind::Forbidden, "Forbidden", err)
            }
            TokenError::InvalidLifetime(_) | TokenError::Signing(_) => {
                AppError::with_source(ErrorKind::Internal, "Failed to issue token", err)
            }
        }
    }
}
