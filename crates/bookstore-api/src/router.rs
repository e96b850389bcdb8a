//! Route definitions for the bookstore HTTP API.
//!
//! Routes fall into three groups by the gates in front of them:
//! public, authenticated (`require_auth`), and author-only
//! (`require_auth` then `require_author`).

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::middleware::author::require_author;
use crate::state::AppState;

/// Build the Axum router with all routes and their gates.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(authenticated_routes(&state))
        .merge(author_routes(&state))
        .with_state(state)
}

/// Health, account entry points, and catalogue reads.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/renew_token", post(handlers::auth::renew_token))
        .route("/logout", post(handlers::auth::logout))
        .route("/authors", get(handlers::user::list_authors))
        .route("/authors/{id}/books", get(handlers::user::list_author_books))
        .route("/books", get(handlers::book::list_books))
        .route("/books/{id}", get(handlers::book::get_book))
}

/// Routes requiring a valid access token.
fn authenticated_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route(
            "/users/my_profile",
            get(handlers::user::get_profile)
                .patch(handlers::user::update_profile)
                .delete(handlers::user::delete_profile),
        )
        .route("/users/author", patch(handlers::user::become_author))
        .route("/users/{id}", get(handlers::user::get_user))
        .route(
            "/readlist",
            get(handlers::read_list::get_read_list).post(handlers::read_list::add_to_read_list),
        )
        .route(
            "/readlist/{book_id}",
            delete(handlers::read_list::remove_from_read_list),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
}

/// Routes requiring a valid access token and the author capability.
fn author_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/books", post(handlers::book::create_book))
        .route(
            "/books/{id}",
            patch(handlers::book::update_book).delete(handlers::book::delete_book),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_author,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
}
