//! Token signing, verification, and issuance.

pub mod claims;
pub mod codec;
pub mod issuer;
pub mod secret;

pub use claims::TokenClaim;
pub use codec::TokenCodec;
pub use issuer::{TokenIssuer, TokenPair};
pub use secret::SigningSecret;
