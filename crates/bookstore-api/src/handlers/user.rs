//! User handlers: profile self-service, directory, and author enrolment.

use axum::Json;
use axum::extract::{Path, State};

use bookstore_entity::user::UpdateUser;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, BookResponse, MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /users/my_profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /users/my_profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_service
        .update_profile(
            &auth,
            UpdateUser {
                name: Some(req.name),
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /users/my_profile
pub async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.user_service.delete_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Profile deleted"))))
}

/// PATCH /users/author
pub async fn become_author(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.user_service.become_author(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "You are now an author",
    ))))
}

/// GET /authors
pub async fn list_authors(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let authors = state.user_service.list_authors().await?;
    Ok(Json(ApiResponse::ok(
        authors.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /authors/{id}/books
pub async fn list_author_books(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<BookResponse>>>> {
    let books = state.book_service.list_by_author(id).await?;
    Ok(Json(ApiResponse::ok(
        books.into_iter().map(BookResponse::from).collect(),
    )))
}
