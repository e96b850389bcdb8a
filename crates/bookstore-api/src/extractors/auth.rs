//! `AuthUser` extractor: the caller identity placed by `require_auth`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use bookstore_auth::CallerIdentity;
use bookstore_core::error::AppError;

use crate::error::ApiError;

/// Authenticated caller available in handlers behind `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CallerIdentity);

impl std::ops::Deref for AuthUser {
    type Target = CallerIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "Handler reached without an authenticated caller");
                ApiError(AppError::forbidden("Forbidden"))
            })
    }
}
