//! The symmetric key tokens are signed with.

use std::fmt;

use bookstore_core::error::AppError;

/// Minimum accepted secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// HMAC signing secret, validated once at startup.
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    /// Validates and wraps `secret`. Fails if it is shorter than [`MIN_SECRET_LEN`].
    pub fn new(secret: impl Into<String>) -> Result<Self, AppError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LEN {
            tracing::error!(
                length = secret.len(),
                min_length = MIN_SECRET_LEN,
                "Signing secret is too short"
            );
            return Err(AppError::configuration(format!(
                "Invalid key size: must be at least {MIN_SECRET_LEN} characters"
            )));
        }
        Ok(Self(secret))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(****)")
    }
}
