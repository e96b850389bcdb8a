//! Auth handlers: register, login, token renewal, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use bookstore_auth::refresh::REFRESH_COOKIE;
use bookstore_core::config::CookieConfig;
use bookstore_service::RegisterUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, RenewTokenResponse, UserResponse,
};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state
        .user_service
        .register(RegisterUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /login
///
/// Returns both tokens and sets the refresh token as an HTTP-only cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let result = state.user_service.login(&req.email, &req.password).await?;
    let tokens = result.tokens;

    let jar = jar.add(refresh_cookie(
        &state.config.server.cookie,
        tokens.refresh_token.clone(),
    ));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            access_token_expires_at: tokens.access_expires_at(),
            refresh_token_expires_at: tokens.refresh_expires_at(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: result.user.into(),
        })),
    ))
}

/// POST /renew_token
pub async fn renew_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<ApiResponse<RenewTokenResponse>>> {
    let renewed = state
        .refresh_flow
        .renew_access_token(jar.get(REFRESH_COOKIE).map(|c| c.value()))?;

    Ok(Json(ApiResponse::ok(RenewTokenResponse {
        access_token: renewed.access_token,
        access_token_expires_at: renewed.access_token_expires_at,
    })))
}

/// POST /logout
///
/// Clears the refresh cookie. Tokens already handed out are not revoked.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    // Emitted whether or not the request carried the cookie.
    let mut cookie = refresh_cookie(&state.config.server.cookie, String::new());
    cookie.make_removal();
    (jar.add(cookie), Json(ApiResponse::ok(MessageResponse::new("Logged out"))))
}

fn refresh_cookie(config: &CookieConfig, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::build((REFRESH_COOKIE, value))
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax);
    if !config.domain.is_empty() {
        cookie = cookie.domain(config.domain.clone());
    }
    cookie.build()
}
