//! Reading list handlers. All routes sit behind `require_auth` and act on
//! the caller's own list.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::AddToReadListRequest;
use crate::dto::response::{ApiResponse, BookResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /readlist
pub async fn get_read_list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<BookResponse>>>> {
    let books = state.read_list_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(
        books.into_iter().map(BookResponse::from).collect(),
    )))
}

/// POST /readlist
pub async fn add_to_read_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AddToReadListRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BookResponse>>)> {
    let book = state.read_list_service.add(&auth, req.book_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(book.into()))))
}

/// DELETE /readlist/{book_id}
pub async fn remove_from_read_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.read_list_service.remove(&auth, book_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Book removed from reading list",
    ))))
}
