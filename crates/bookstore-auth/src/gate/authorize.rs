//! Author capability gate.

use std::sync::Arc;

use bookstore_core::error::{AppError, ErrorKind};
use bookstore_core::result::AppResult;
use bookstore_database::store::UserStore;

use super::identity::CallerIdentity;

/// Admits only callers whose user record currently has the author flag.
///
/// The flag is read from the store on every call and never taken from the
/// token, so granting or revoking it applies to the very next request.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    users: Arc<dyn UserStore>,
}

impl AuthorizationGate {
    /// Creates a gate reading capability state from `users`.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Permits or denies an authenticated caller.
    ///
    /// - no resolved identity → `Forbidden`
    /// - subject no longer exists → `NotFound`
    /// - store failure → `Internal`, details logged only
    /// - author flag unset → `Forbidden`
    pub async fn authorize(&self, caller: Option<&CallerIdentity>) -> AppResult<()> {
        let Some(caller) = caller else {
            tracing::error!("Author gate reached without an authenticated caller");
            return Err(AppError::forbidden("Forbidden"));
        };

        let user = match self.users.find_by_id(caller.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(user_id = caller.user_id, "Token subject no longer exists");
                return Err(AppError::not_found("User not found"));
            }
            Err(err) => {
                tracing::error!(user_id = caller.user_id, error = %err, "Failed to load caller");
                return Err(AppError::with_source(
                    ErrorKind::Internal,
                    "Internal server error",
                    err,
                ));
            }
        };

        if !user.is_author {
            tracing::warn!(user_id = user.id, "Caller is not an author");
            return Err(AppError::forbidden("Forbidden"));
        }

        Ok(())
    }
}
