//! HS256 token signing and verification.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::clock::{Clock, SystemClock};
use crate::error::TokenError;

use super::claims::TokenClaim;
use super::secret::SigningSecret;

/// Serializes claims into signed tokens and validates them back.
///
/// Holds only immutable state, so a single instance is shared across all
/// request tasks behind an `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .field("clock", &self.clock)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec reading wall-clock time.
    pub fn new(secret: &SigningSecret) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Creates a codec reading time from `clock`.
    pub fn with_clock(secret: &SigningSecret, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry lives in `expires_at` and is checked against `clock` once the
        // signature is known good.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Signs a fresh claim for `user_id`/`email` that expires after `lifetime`.
    pub fn issue(
        &self,
        user_id: i64,
        email: &str,
        lifetime: std::time::Duration,
    ) -> Result<(String, TokenClaim), TokenError> {
        let claim = TokenClaim::new(user_id, email, self.clock.now(), lifetime)?;

        let token = encode(&Header::new(Algorithm::HS256), &claim, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok((token, claim))
    }

    /// Validates `token` and returns its claim.
    ///
    /// Checks, in order:
    /// 1. Structure, algorithm (HS256 only), and signature
    /// 2. Claim consistency (`expires_at > issued_at`)
    /// 3. Expiry against the clock, with no leeway
    pub fn verify(&self, token: &str) -> Result<TokenClaim, TokenError> {
        let claim = decode::<TokenClaim>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token failed signature or format checks");
                TokenError::InvalidToken
            })?
            .claims;

        if claim.expires_at <= claim.issued_at {
            return Err(TokenError::InvalidToken);
        }

        if claim.is_expired_at(self.clock.now()) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use chrono::{DateTime, Utc};
    use std::time::Duration;

    const SECRET: &str = "an-hs256-test-secret-of-sufficient-length";

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn codec_with_clock() -> (TokenCodec, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let secret = SigningSecret::new(SECRET).unwrap();
        (TokenCodec::with_clock(&secret, clock.clone()), clock)
    }

    #[test]
    fn test_verify_returns_issued_identity() {
        let codec = TokenCodec::new(&SigningSecret::new(SECRET).unwrap());
        let (token, issued) = codec
            .issue(42, "reader@x.com", Duration::from_secs(60))
            .unwrap();

        let claim = codec.verify(&token).unwrap();
        assert_eq!(claim.user_id, 42);
        assert_eq!(claim.email, "reader@x.com");
        assert_eq!(claim, issued);
    }

    #[test]
    fn test_identical_inputs_give_distinct_tokens() {
        let (codec, _) = codec_with_clock();
        let (a, claim_a) = codec.issue(1, "a@x.com", Duration::from_secs(60)).unwrap();
        let (b, claim_b) = codec.issue(1, "a@x.com", Duration::from_secs(60)).unwrap();
        assert_ne!(a, b);
        assert_ne!(claim_a.jti, claim_b.jti);
    }

    #[test]
    fn test_any_flipped_bit_is_invalid() {
        let (codec, _) = codec_with_clock();
        let (token, _) = codec.issue(7, "flip@x.com", Duration::from_secs(60)).unwrap();

        let bytes = token.as_bytes();
        for index in 0..bytes.len() {
            for bit in 0..8 {
                let mut tampered = bytes.to_vec();
                tampered[index] ^= 1 << bit;
                let Ok(tampered) = String::from_utf8(tampered) else {
                    continue;
                };
                assert_eq!(
                    codec.verify(&tampered),
                    Err(TokenError::InvalidToken),
                    "byte {index} bit {bit} was accepted"
                );
            }
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let (codec, clock) = codec_with_clock();
        let (token, _) = codec.issue(1, "a@x.com", Duration::from_secs(900)).unwrap();

        clock.advance(chrono::Duration::seconds(899));
        assert!(codec.verify(&token).is_ok());

        clock.advance(chrono::Duration::seconds(1));
        assert!(codec.verify(&token).is_ok());

        clock.advance(chrono::Duration::seconds(1));
        assert_eq!(codec.verify(&token), Err(TokenError::ExpiredToken));
    }

    #[test]
    fn test_expiry_is_exact_below_one_second() {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 500_000_000).unwrap(),
        ));
        let codec = TokenCodec::with_clock(&SigningSecret::new(SECRET).unwrap(), clock.clone());
        let (token, claim) = codec.issue(1, "a@x.com", Duration::from_secs(900)).unwrap();
        assert_eq!(claim.expires_at, clock.now() + chrono::Duration::seconds(900));

        clock.advance(chrono::Duration::seconds(900));
        assert!(codec.verify(&token).is_ok());

        clock.advance(chrono::Duration::milliseconds(300));
        assert_eq!(codec.verify(&token), Err(TokenError::ExpiredToken));
    }

    #[test]
    fn test_wrong_secret_is_invalid_even_when_expired() {
        let (codec, clock) = codec_with_clock();
        let other = TokenCodec::with_clock(
            &SigningSecret::new("another-secret-that-is-also-long-enough").unwrap(),
            clock.clone(),
        );
        let (token, _) = other.issue(1, "a@x.com", Duration::from_secs(60)).unwrap();

        assert_eq!(codec.verify(&token), Err(TokenError::InvalidToken));

        clock.advance(chrono::Duration::hours(1));
        assert_eq!(codec.verify(&token), Err(TokenError::InvalidToken));
        assert_eq!(other.verify(&token), Err(TokenError::ExpiredToken));
    }

    #[test]
    fn test_other_algorithm_is_invalid() {
        let (codec, _) = codec_with_clock();
        let claim = TokenClaim::new(1, "a@x.com", start(), Duration::from_secs(60)).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claim,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(codec.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let (codec, _) = codec_with_clock();
        for token in ["", "abc", "a.b.c", "....", "eyJhbGciOiJub25lIn0.e30."] {
            assert_eq!(codec.verify(token), Err(TokenError::InvalidToken), "{token:?}");
        }
    }

    #[test]
    fn test_zero_lifetime_is_rejected() {
        let (codec, _) = codec_with_clock();
        let err = codec.issue(1, "a@x.com", Duration::ZERO).unwrap_err();
        assert!(matches!(err, TokenError::InvalidLifetime(_)));
    }
}
