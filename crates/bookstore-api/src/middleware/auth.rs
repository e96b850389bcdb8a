//! Bearer-token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiResult;
use crate::state::AppState;

/// Runs the authentication gate and stores the resolved
/// [`CallerIdentity`](bookstore_auth::CallerIdentity) in the request
/// extensions for downstream middleware and the `AuthUser` extractor.
///
/// Any failure short-circuits with `403 Forbidden`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let caller = state.authentication_gate.authenticate(header)?;
    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}
