//! The caller identity resolved by the authentication gate.

use serde::{Deserialize, Serialize};

use crate::jwt::TokenClaim;

/// Who is making the request, as proven by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Subject user ID.
    pub user_id: i64,
    /// Subject email.
    pub email: String,
}

impl From<TokenClaim> for CallerIdentity {
    fn from(claim: TokenClaim) -> Self {
        Self {
            user_id: claim.user_id,
            email: claim.email,
        }
    }
}
