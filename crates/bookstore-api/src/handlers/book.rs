//! Book handlers. Writes sit behind `require_auth` and `require_author`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use bookstore_entity::book::UpdateBook;
use bookstore_service::NewBook;

use crate::dto::request::{CreateBookRequest, UpdateBookRequest};
use crate::dto::response::{ApiResponse, BookResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<BookResponse>>>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(ApiResponse::ok(
        books.into_iter().map(BookResponse::from).collect(),
    )))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<BookResponse>>> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(ApiResponse::ok(book.into())))
}

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BookResponse>>)> {
    let book = state
        .book_service
        .create_book(
            &auth,
            NewBook {
                title: req.title,
                description: req.description,
                price: req.price,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(book.into()))))
}

/// PATCH /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateBookRequest>,
) -> ApiResult<Json<ApiResponse<BookResponse>>> {
    let book = state
        .book_service
        .update_book(
            &auth,
            id,
            UpdateBook {
                title: req.title,
                description: req.description,
                price: req.price,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(book.into())))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.book_service.delete_book(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Book deleted"))))
}
