//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use bookstore_auth::password::{PasswordHasher, PasswordValidator};
use bookstore_auth::{
    AuthenticationGate, AuthorizationGate, Clock, RefreshFlow, SigningSecret, SystemClock,
    TokenCodec, TokenIssuer,
};
use bookstore_core::config::AppConfig;
use bookstore_database::store::{BookStore, ReadListStore, UserStore};
use bookstore_service::{BookService, ReadListService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Access/refresh token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Bearer token verification for protected routes
    pub authentication_gate: Arc<AuthenticationGate>,
    /// Author capability check for publishing routes
    pub authorization_gate: Arc<AuthorizationGate>,
    /// Access token renewal from the refresh cookie
    pub refresh_flow: Arc<RefreshFlow>,

    // ── Services ─────────────────────────────────────────────
    /// Account and profile service
    pub user_service: Arc<UserService>,
    /// Book catalogue service
    pub book_service: Arc<BookService>,
    /// Caller's reading list service
    pub read_list_service: Arc<ReadListService>,
}

impl AppState {
    /// Wires the auth components and services over the given stores.
    pub fn new(
        config: AppConfig,
        secret: &SigningSecret,
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
        read_lists: Arc<dyn ReadListStore>,
    ) -> Self {
        Self::with_clock(
            config,
            secret,
            Arc::new(SystemClock),
            users,
            books,
            read_lists,
        )
    }

    /// Same as [`AppState::new`] with token time read from `clock`.
    pub fn with_clock(
        config: AppConfig,
        secret: &SigningSecret,
        clock: Arc<dyn Clock>,
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
        read_lists: Arc<dyn ReadListStore>,
    ) -> Self {
        let codec = Arc::new(TokenCodec::with_clock(secret, clock));
        let token_issuer = Arc::new(TokenIssuer::from_config(Arc::clone(&codec), &config.auth));

        let authentication_gate = Arc::new(AuthenticationGate::new(Arc::clone(&codec)));
        let authorization_gate = Arc::new(AuthorizationGate::new(Arc::clone(&users)));
        let refresh_flow = Arc::new(RefreshFlow::new(Arc::clone(&token_issuer)));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config.auth)),
            Arc::clone(&token_issuer),
        ));
        let book_service = Arc::new(BookService::new(Arc::clone(&books), Arc::clone(&users)));
        let read_list_service = Arc::new(ReadListService::new(read_lists, books, users));

        Self {
            config: Arc::new(config),
            token_issuer,
            authentication_gate,
            authorization_gate,
            refresh_flow,
            user_service,
            book_service,
            read_list_service,
        }
    }
}
