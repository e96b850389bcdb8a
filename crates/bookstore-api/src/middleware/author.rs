//! Author capability middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use bookstore_auth::CallerIdentity;

use crate::error::ApiResult;
use crate::state::AppState;

/// Admits only callers currently flagged as authors.
///
/// Must be layered inside [`require_auth`](super::auth::require_auth); a
/// request reaching it without an identity is rejected as `Forbidden`.
pub async fn require_author(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let caller = request.extensions().get::<CallerIdentity>().cloned();

    state.authorization_gate.authorize(caller.as_ref()).await?;

    Ok(next.run(request).await)
}
