//! # bookstore-auth
//!
//! Stateless bearer-token authentication and author capability gating.
//!
//! ## Modules
//!
//! - `jwt`: signing secret, token claims, the HS256 codec, and the access/refresh issuer
//! - `gate`: the per-request authentication gate and the author authorization gate
//! - `refresh`: exchanging a refresh token for a new access token
//! - `password`: Argon2id password hashing and policy checks
//! - `clock`: the time source the codec reads

pub mod clock;
pub mod error;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod refresh;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TokenError;
pub use gate::{AuthenticationGate, AuthorizationGate, CallerIdentity};
pub use jwt::{SigningSecret, TokenClaim, TokenCodec, TokenIssuer, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use refresh::{RefreshFlow, RenewedAccessToken};
